//! Dealership
//!
//! Application state owning one repository per entity type, and the operations the
//! presentation layer calls. [`Dealership::purchase_vehicle`] is the only operation that
//! touches more than one repository.

use std::sync::Arc;

use rusty_money::iso::{Currency, USD};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    entities::{
        Client, ClientId, ClientTier, Employee, EmployeeError, EmployeeId, NewClient,
        NewEmployee, NewSale, NewVehicle, Person, Salary, Sale, Vehicle, VehicleId,
    },
    pricing::{Amount, PricingError, discounted_price, tier_discount},
    repository::Repository,
};

/// Errors raised while registering entities.
#[derive(Debug, Error)]
pub enum DealershipError {
    /// An argument failed validation, e.g. a negative salary.
    #[error(transparent)]
    InvalidArgument(#[from] EmployeeError),

    /// An amount's currency differs from the dealership currency (field, amount currency, dealership currency).
    #[error("{0} has currency {1}, but the dealership uses {2}")]
    CurrencyMismatch(&'static str, &'static str, &'static str),
}

/// Reasons a vehicle purchase is refused.
///
/// Every variant except [`SaleError::Pricing`] is a "not found" condition the user can
/// fix by entering different input.
#[derive(Debug, Error)]
pub enum SaleError {
    /// No client has been registered yet.
    #[error("no clients registered; register first")]
    NoClients,

    /// The inventory is empty.
    #[error("no vehicles available")]
    NoVehicles,

    /// No vehicle in the inventory has this id.
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    /// No client has this id.
    #[error("client {0} not found")]
    ClientNotFound(ClientId),

    /// The sale price could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl SaleError {
    /// Whether the purchase failed because something was missing.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, SaleError::Pricing(_))
    }
}

/// The dealership back office.
#[derive(Debug)]
pub struct Dealership {
    currency: &'static Currency,
    employees: Repository<Employee>,
    clients: Repository<Client>,
    vehicles: Repository<Vehicle>,
    sales: Repository<Sale>,
}

impl Dealership {
    /// Create an empty dealership trading in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Dealership {
            currency,
            employees: Repository::new(),
            clients: Repository::new(),
            vehicles: Repository::new(),
            sales: Repository::new(),
        }
    }

    /// Currency of every salary and price.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Register an employee.
    ///
    /// # Errors
    ///
    /// - [`DealershipError::InvalidArgument`]: the salary is negative.
    /// - [`DealershipError::CurrencyMismatch`]: the salary is in another currency.
    ///
    /// Nothing is stored when an error is returned.
    pub fn add_employee(
        &mut self,
        name: impl Into<String>,
        national_id: impl Into<String>,
        position: impl Into<String>,
        salary: Amount,
    ) -> Result<Arc<Employee>, DealershipError> {
        let salary = Salary::new(salary).inspect_err(|error| warn!(%error, "employee rejected"))?;

        self.ensure_currency("salary", salary.amount())?;

        let employee = self.employees.add(NewEmployee {
            person: Person::new(name, national_id),
            position: position.into(),
            salary,
        });

        debug!(id = %employee.id(), "employee added");

        Ok(employee)
    }

    /// Register a client.
    pub fn add_client(
        &mut self,
        name: impl Into<String>,
        national_id: impl Into<String>,
        phone: impl Into<String>,
        tier: impl Into<ClientTier>,
    ) -> Arc<Client> {
        let client = self.clients.add(NewClient {
            person: Person::new(name, national_id),
            phone: phone.into(),
            tier: tier.into(),
        });

        debug!(id = %client.id(), tier = %client.tier(), "client added");

        client
    }

    /// Add a vehicle to the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`DealershipError::CurrencyMismatch`] if the price is in another currency.
    pub fn add_vehicle(
        &mut self,
        brand: impl Into<String>,
        model: impl Into<String>,
        price: Amount,
    ) -> Result<Arc<Vehicle>, DealershipError> {
        self.ensure_currency("price", &price)?;

        let vehicle = self.vehicles.add(NewVehicle {
            brand: brand.into(),
            model: model.into(),
            price,
        });

        debug!(id = %vehicle.id(), "vehicle added");

        Ok(vehicle)
    }

    /// Registered employees, in registration order.
    pub fn employees(&self) -> &[Arc<Employee>] {
        self.employees.list()
    }

    /// Registered clients, in registration order.
    pub fn clients(&self) -> &[Arc<Client>] {
        self.clients.list()
    }

    /// Vehicles still for sale, in the order they were added.
    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        self.vehicles.list()
    }

    /// Completed sales, oldest first.
    pub fn sales(&self) -> &[Arc<Sale>] {
        self.sales.list()
    }

    /// Look up an employee.
    pub fn find_employee(&self, id: EmployeeId) -> Option<&Arc<Employee>> {
        self.employees.find_by_id(id)
    }

    /// Look up a client.
    pub fn find_client(&self, id: ClientId) -> Option<&Arc<Client>> {
        self.clients.find_by_id(id)
    }

    /// Look up a vehicle that is still for sale.
    pub fn find_vehicle(&self, id: VehicleId) -> Option<&Arc<Vehicle>> {
        self.vehicles.find_by_id(id)
    }

    /// Check that a sale could go ahead: at least one client and one vehicle exist.
    ///
    /// # Errors
    ///
    /// Returns [`SaleError::NoClients`] or [`SaleError::NoVehicles`], checked in that order.
    pub fn ensure_ready_for_sale(&self) -> Result<(), SaleError> {
        if self.clients.is_empty() {
            return Err(SaleError::NoClients);
        }

        if self.vehicles.is_empty() {
            return Err(SaleError::NoVehicles);
        }

        Ok(())
    }

    /// Sell a vehicle to a client.
    ///
    /// VIP clients pay 20% less than the asking price, everyone else 10% less. The sale
    /// is recorded and the vehicle leaves the inventory in the same step; on error
    /// neither happens.
    ///
    /// # Errors
    ///
    /// - [`SaleError::NoClients`] / [`SaleError::NoVehicles`]: a repository is empty.
    /// - [`SaleError::VehicleNotFound`]: no vehicle for sale has `vehicle_id`.
    /// - [`SaleError::ClientNotFound`]: no client has `client_id`.
    /// - [`SaleError::Pricing`]: the final price cannot be represented.
    pub fn purchase_vehicle(
        &mut self,
        vehicle_id: VehicleId,
        client_id: ClientId,
    ) -> Result<Arc<Sale>, SaleError> {
        self.try_purchase_vehicle(vehicle_id, client_id)
            .inspect_err(|error| warn!(%error, %vehicle_id, %client_id, "purchase refused"))
    }

    fn try_purchase_vehicle(
        &mut self,
        vehicle_id: VehicleId,
        client_id: ClientId,
    ) -> Result<Arc<Sale>, SaleError> {
        self.ensure_ready_for_sale()?;

        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .cloned()
            .ok_or(SaleError::VehicleNotFound(vehicle_id))?;

        let client = self
            .clients
            .find_by_id(client_id)
            .cloned()
            .ok_or(SaleError::ClientNotFound(client_id))?;

        let discount = tier_discount(client.tier());
        let final_price = discounted_price(vehicle.price(), &discount)?;

        // Nothing below can fail: the sale and the inventory removal happen together.
        let sale = self.sales.add(NewSale {
            client,
            vehicle: Arc::clone(&vehicle),
            discount,
            final_price,
        });

        let removed = self.vehicles.remove(&vehicle);

        debug_assert!(
            removed.is_some(),
            "sold vehicle {} missing from inventory",
            vehicle.id()
        );

        info!(
            sale = %sale.id(),
            %vehicle_id,
            %client_id,
            final_price = %sale.final_price(),
            "vehicle sold"
        );

        Ok(sale)
    }

    fn ensure_currency(&self, field: &'static str, amount: &Amount) -> Result<(), DealershipError> {
        let currency = amount.currency();

        if currency == self.currency {
            return Ok(());
        }

        warn!(
            field,
            currency = currency.iso_alpha_code,
            "amount rejected: wrong currency"
        );

        Err(DealershipError::CurrencyMismatch(
            field,
            currency.iso_alpha_code,
            self.currency.iso_alpha_code,
        ))
    }
}

impl Default for Dealership {
    fn default() -> Self {
        Self::new(USD)
    }
}
