//! Vehicles

use std::fmt;

use crate::{entities::Displayable, ids::TypedId, pricing::Amount, repository::Record};

/// Vehicle identifier
pub type VehicleId = TypedId<Vehicle>;

/// New Vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    /// Manufacturer
    pub brand: String,

    /// Model name
    pub model: String,

    /// Asking price
    pub price: Amount,
}

/// A vehicle in the dealership inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    brand: String,
    model: String,
    price: Amount,
}

impl Vehicle {
    /// Vehicle identifier
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Manufacturer
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asking price
    pub fn price(&self) -> &Amount {
        &self.price
    }

    /// Brand and model, e.g. `Honda Civic`.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

impl Record for Vehicle {
    type Draft = NewVehicle;

    fn from_draft(id: VehicleId, draft: NewVehicle) -> Self {
        Vehicle {
            id,
            brand: draft.brand,
            model: draft.model,
            price: draft.price,
        }
    }

    fn id(&self) -> VehicleId {
        self.id
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Brand: {}, Model: {}, Price: {}",
            self.id, self.brand, self.model, self.price
        )
    }
}

impl Displayable for Vehicle {
    fn greeting(&self) -> String {
        format!("I'm a {} and I'm for sale.", self.title())
    }
}
