//! Tables and receipts

use std::{io, sync::Arc};

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use forecourt::{
    entities::{Client, Employee, Sale, Vehicle},
    pricing::percent_points,
};

pub(crate) fn employees(out: &mut impl io::Write, employees: &[Arc<Employee>]) -> io::Result<()> {
    let rows = employees.iter().map(|employee| {
        [
            employee.id().to_string(),
            employee.name().to_string(),
            employee.national_id().to_string(),
            employee.position().to_string(),
            employee.salary().to_string(),
        ]
    });

    write_table(out, ["ID", "Name", "National ID", "Position", "Salary"], rows, 4)
}

pub(crate) fn clients(out: &mut impl io::Write, clients: &[Arc<Client>]) -> io::Result<()> {
    let rows = clients.iter().map(|client| {
        [
            client.id().to_string(),
            client.name().to_string(),
            client.national_id().to_string(),
            client.phone().to_string(),
            client.tier().to_string(),
        ]
    });

    write_table(out, ["ID", "Name", "National ID", "Phone", "Tier"], rows, 5)
}

pub(crate) fn vehicles(out: &mut impl io::Write, vehicles: &[Arc<Vehicle>]) -> io::Result<()> {
    let rows = vehicles.iter().map(|vehicle| {
        [
            vehicle.id().to_string(),
            vehicle.brand().to_string(),
            vehicle.model().to_string(),
            vehicle.price().to_string(),
        ]
    });

    write_table(out, ["ID", "Brand", "Model", "Price"], rows, 3)
}

pub(crate) fn sales(out: &mut impl io::Write, sales: &[Arc<Sale>]) -> io::Result<()> {
    let rows = sales.iter().map(|sale| {
        [
            sale.id().to_string(),
            sale.client().name().to_string(),
            sale.vehicle().title(),
            format!("{}%", percent_points(sale.discount())),
            sale.final_price().to_string(),
        ]
    });

    write_table(
        out,
        ["ID", "Client", "Vehicle", "Discount", "Final Price"],
        rows,
        3,
    )
}

/// Confirmation printed after a purchase.
pub(crate) fn receipt(out: &mut impl io::Write, sale: &Sale) -> io::Result<()> {
    writeln!(out, "Purchase successful for {}!", sale.client().name())?;

    let mut builder = Builder::default();

    builder.push_record(["Vehicle".to_string(), sale.vehicle().title()]);
    builder.push_record(["Original Price".to_string(), sale.original_price().to_string()]);
    builder.push_record([
        "Discount".to_string(),
        format!("{}% ({} client)", percent_points(sale.discount()), sale.client().tier()),
    ]);
    builder.push_record(["Final Price".to_string(), sale.final_price().to_string()]);

    if let Ok(savings) = sale.savings() {
        builder.push_record(["You Save".to_string(), savings.to_string()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::first(), Color::BOLD);
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{table}")
}

fn write_table<const N: usize>(
    out: &mut impl io::Write,
    header: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
    right_aligned_from: usize,
) -> io::Result<()> {
    let mut rows = rows.peekable();

    if rows.peek().is_none() {
        return writeln!(out, "No records.");
    }

    let mut builder = Builder::default();

    builder.push_record(header);

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(right_aligned_from..), Alignment::right());

    writeln!(out, "{table}")
}
