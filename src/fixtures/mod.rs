//! Fixtures
//!
//! YAML seed files that populate a [`Dealership`] before the console starts. Money fields
//! are decimal strings in the dealership currency. Sales are replayed through
//! [`Dealership::purchase_vehicle`], so sold vehicles leave the inventory exactly as they
//! would at the counter.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    dealership::{Dealership, DealershipError, SaleError},
    entities::{ClientId, VehicleId},
    pricing::{PricingError, parse_amount},
};

pub mod records;

pub use records::{ClientRecord, EmployeeRecord, SaleRecord, VehicleRecord};

/// Fixture Loading Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading the fixture file
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid salary or price
    #[error("Invalid amount: {0}")]
    Pricing(#[from] PricingError),

    /// Two clients or two vehicles share a key
    #[error("Duplicate fixture key: {0}")]
    DuplicateKey(String),

    /// A sale names a client key that was not defined
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// A sale names a vehicle key that was not defined
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// An entity was rejected by the dealership
    #[error(transparent)]
    Dealership(#[from] DealershipError),

    /// A replayed sale was refused
    #[error("Failed to replay sale: {0}")]
    Sale(#[from] SaleError),
}

/// Contents of a fixture file.
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DealershipFixture {
    /// Employees, registered in file order
    pub employees: Vec<EmployeeRecord>,

    /// Clients, registered in file order
    pub clients: Vec<ClientRecord>,

    /// Vehicles, added in file order
    pub vehicles: Vec<VehicleRecord>,

    /// Sales, replayed after everything else is loaded
    pub sales: Vec<SaleRecord>,
}

impl DealershipFixture {
    /// Read a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Yaml` if the text is not a valid fixture.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load every record into `dealership`, then replay the sales.
    ///
    /// Loading stops at the first error; records before it stay in the dealership.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount does not parse, a key is duplicated or unknown, or
    /// the dealership rejects an entity or a sale.
    pub fn seed(self, dealership: &mut Dealership) -> Result<(), FixtureError> {
        let currency = dealership.currency();

        for record in self.employees {
            let salary = parse_amount(&record.salary, currency)?;

            dealership.add_employee(record.name, record.national_id, record.position, salary)?;
        }

        let mut client_keys: FxHashMap<String, ClientId> = FxHashMap::default();

        for record in self.clients {
            if client_keys.contains_key(&record.key) {
                return Err(FixtureError::DuplicateKey(record.key));
            }

            let client =
                dealership.add_client(record.name, record.national_id, record.phone, record.tier);

            client_keys.insert(record.key, client.id());
        }

        let mut vehicle_keys: FxHashMap<String, VehicleId> = FxHashMap::default();

        for record in self.vehicles {
            if vehicle_keys.contains_key(&record.key) {
                return Err(FixtureError::DuplicateKey(record.key));
            }

            let price = parse_amount(&record.price, currency)?;
            let vehicle = dealership.add_vehicle(record.brand, record.model, price)?;

            vehicle_keys.insert(record.key, vehicle.id());
        }

        for record in self.sales {
            let client_id = *client_keys
                .get(&record.client)
                .ok_or_else(|| FixtureError::ClientNotFound(record.client.clone()))?;

            let vehicle_id = *vehicle_keys
                .get(&record.vehicle)
                .ok_or_else(|| FixtureError::VehicleNotFound(record.vehicle.clone()))?;

            dealership.purchase_vehicle(vehicle_id, client_id)?;
        }

        info!(
            employees = dealership.employees().len(),
            clients = dealership.clients().len(),
            vehicles = dealership.vehicles().len(),
            sales = dealership.sales().len(),
            "fixture loaded"
        );

        Ok(())
    }
}
