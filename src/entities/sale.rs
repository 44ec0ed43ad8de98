//! Sales

use std::{fmt, sync::Arc};

use decimal_percentage::Percentage;
use rusty_money::MoneyError;

use crate::{
    entities::{Client, Displayable, Vehicle},
    ids::TypedId,
    pricing::Amount,
    repository::Record,
};

/// Sale identifier
pub type SaleId = TypedId<Sale>;

/// New Sale
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    /// Buyer, shared with the client repository
    pub client: Arc<Client>,

    /// Vehicle sold, shared with (and then removed from) the vehicle inventory
    pub vehicle: Arc<Vehicle>,

    /// Discount rate applied to the vehicle price
    pub discount: Percentage,

    /// Price paid after the discount
    pub final_price: Amount,
}

/// A completed vehicle sale.
///
/// The client and vehicle are the stored records themselves, not copies taken at sale
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    id: SaleId,
    client: Arc<Client>,
    vehicle: Arc<Vehicle>,
    discount: Percentage,
    final_price: Amount,
}

impl Sale {
    /// Sale identifier
    pub fn id(&self) -> SaleId {
        self.id
    }

    /// Buyer
    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// Vehicle sold
    pub fn vehicle(&self) -> &Arc<Vehicle> {
        &self.vehicle
    }

    /// Discount rate that was applied
    pub fn discount(&self) -> Percentage {
        self.discount
    }

    /// Vehicle price before the discount
    pub fn original_price(&self) -> &Amount {
        self.vehicle.price()
    }

    /// Price paid
    pub fn final_price(&self) -> &Amount {
        &self.final_price
    }

    /// Amount taken off the vehicle price.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Amount, MoneyError> {
        self.original_price().sub(self.final_price)
    }
}

impl Record for Sale {
    type Draft = NewSale;

    fn from_draft(id: SaleId, draft: NewSale) -> Self {
        Sale {
            id,
            client: draft.client,
            vehicle: draft.vehicle,
            discount: draft.discount,
            final_price: draft.final_price,
        }
    }

    fn id(&self) -> SaleId {
        self.id
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sale ID: {}, Client: {}, Vehicle: {}, Final Price: {}",
            self.id,
            self.client.name(),
            self.vehicle.title(),
            self.final_price
        )
    }
}

impl Displayable for Sale {}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::entities::{ClientId, NewClient, NewVehicle, Person, VehicleId};

    use super::*;

    fn test_sale() -> Sale {
        let client = Client::from_draft(
            ClientId::new(1),
            NewClient {
                person: Person::new("Bob", "202"),
                phone: "555".to_string(),
                tier: "VIP".into(),
            },
        );

        let vehicle = Vehicle::from_draft(
            VehicleId::new(2),
            NewVehicle {
                brand: "Honda".to_string(),
                model: "Civic".to_string(),
                price: Money::from_minor(10_000, USD),
            },
        );

        Sale::from_draft(
            SaleId::new(1),
            NewSale {
                client: Arc::new(client),
                vehicle: Arc::new(vehicle),
                discount: Percentage::from(Decimal::new(20, 2)),
                final_price: Money::from_minor(8_000, USD),
            },
        )
    }

    #[test]
    fn display_names_client_and_vehicle() {
        assert_eq!(
            test_sale().display(),
            "Sale ID: 1, Client: Bob, Vehicle: Honda Civic, Final Price: $80.00"
        );
    }

    #[test]
    fn greeting_uses_shared_default() {
        assert_eq!(
            test_sale().greeting(),
            "Hi, I'm an entity of the dealership."
        );
    }

    #[test]
    fn savings_is_original_minus_final() -> TestResult {
        let sale = test_sale();

        assert_eq!(sale.original_price(), &Money::from_minor(10_000, USD));
        assert_eq!(sale.savings()?, Money::from_minor(2_000, USD));

        Ok(())
    }
}
