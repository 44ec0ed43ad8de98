//! Forecourt prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    dealership::{Dealership, DealershipError, SaleError},
    entities::{
        Client, ClientId, ClientTier, Displayable, Employee, EmployeeError, EmployeeId, Person,
        Sale, SaleId, Vehicle, VehicleId,
    },
    fixtures::{DealershipFixture, FixtureError},
    ids::TypedId,
    pricing::{Amount, PricingError, parse_amount, parse_currency, tier_discount},
    repository::{Record, Repository},
};
