//! Forecourt
//!
//! Forecourt is the back office of a car dealership: it keeps employees, clients and the
//! vehicle inventory in memory and sells vehicles to clients at a tier discount.

pub mod dealership;
pub mod entities;
pub mod fixtures;
pub mod ids;
pub mod prelude;
pub mod pricing;
pub mod repository;
