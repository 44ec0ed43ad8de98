//! Fixture Records

use serde::Deserialize;

/// Employee entry in a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    /// Full name
    pub name: String,

    /// National identity document number
    pub national_id: String,

    /// Job title
    pub position: String,

    /// Decimal salary in the dealership currency, e.g. `"1500.00"`
    pub salary: String,
}

/// Client entry in a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRecord {
    /// Fixture-local key that sales refer to
    pub key: String,

    /// Full name
    pub name: String,

    /// National identity document number
    pub national_id: String,

    /// Contact phone number
    pub phone: String,

    /// Tier label, `VIP` or anything else
    pub tier: String,
}

/// Vehicle entry in a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    /// Fixture-local key that sales refer to
    pub key: String,

    /// Manufacturer
    pub brand: String,

    /// Model name
    pub model: String,

    /// Decimal price in the dealership currency, e.g. `"20000.00"`
    pub price: String,
}

/// Sale to replay after the inventory is loaded
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRecord {
    /// Key of the buying client
    pub client: String,

    /// Key of the vehicle sold
    pub vehicle: String,
}
