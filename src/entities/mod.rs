//! Entities
//!
//! The records kept by the dealership: employees, clients, vehicles and sales.

use std::fmt;

pub mod client;
pub mod employee;
pub mod person;
pub mod sale;
pub mod vehicle;

pub use client::{Client, ClientId, ClientTier, NewClient};
pub use employee::{Employee, EmployeeError, EmployeeId, NewEmployee, Salary};
pub use person::Person;
pub use sale::{NewSale, Sale, SaleId};
pub use vehicle::{NewVehicle, Vehicle, VehicleId};

/// Rendering shared by every entity.
pub trait Displayable: fmt::Display {
    /// Single-line, human readable rendering of every field.
    fn display(&self) -> String {
        self.to_string()
    }

    /// A short first-person introduction.
    fn greeting(&self) -> String {
        String::from("Hi, I'm an entity of the dealership.")
    }
}
