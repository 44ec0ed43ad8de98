//! Pricing
//!
//! The tier discount policy and the minor-unit arithmetic behind a sale price.
//!
//! The policy is flat: VIP clients get 20% off, everyone else 10%. Discounts are
//! computed on the price's minor units and rounded half away from zero, so a final price
//! is always a whole number of cents (or pence).

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{
    Money, MoneyError,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

use crate::entities::ClientTier;

/// A monetary amount in one of the ISO currencies.
pub type Amount = Money<'static, Currency>;

/// Errors raised while parsing amounts or pricing a sale.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// The input was not a decimal amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The currency code is not one the dealership trades in.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Discount granted to VIP clients.
#[must_use]
pub fn vip_discount() -> Percentage {
    Percentage::from(Decimal::new(20, 2))
}

/// Discount granted to every other client.
#[must_use]
pub fn regular_discount() -> Percentage {
    Percentage::from(Decimal::new(10, 2))
}

/// Discount rate for a client tier.
pub fn tier_discount(tier: &ClientTier) -> Percentage {
    if tier.is_vip() {
        vip_discount()
    } else {
        regular_discount()
    }
}

/// Price left after taking `discount` off `price`.
///
/// The discount amount is rounded to whole minor units, half away from zero, before it
/// is subtracted. At a half-unit tie the buyer gets the extra unit: 10% off `$0.05` is
/// `$0.04`, not the `$0.045` an exact calculation would display as `$0.05`.
///
/// # Errors
///
/// Returns an error if:
/// - the discount cannot be represented in minor units (`PricingError::PercentConversion`).
/// - the money arithmetic fails (`PricingError::Money`).
pub fn discounted_price(price: &Amount, discount: &Percentage) -> Result<Amount, PricingError> {
    let discount_minor = percent_of_minor(discount, price.to_minor_units())?;
    let discount_amount = Money::from_minor(discount_minor, price.currency());

    Ok(price.sub(discount_amount)?)
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns `PricingError::PercentConversion` if the calculation overflows.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, PricingError> {
    let minor = Decimal::from_i64(minor).ok_or(PricingError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // the crate does not expose the inner Decimal
        .checked_mul(minor)
        .ok_or(PricingError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::PercentConversion)
}

/// Percent points of a fractional percentage, e.g. `0.2` becomes `20`.
pub fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED)
        .round_dp(2)
        .normalize()
}

/// Parse a decimal amount (e.g. `"1499.99"`) in the given currency.
///
/// Amounts are rounded to whole minor units.
///
/// # Errors
///
/// Returns `PricingError::InvalidAmount` if the input is not a decimal number or is too
/// large to represent in minor units.
pub fn parse_amount(input: &str, currency: &'static Currency) -> Result<Amount, PricingError> {
    let amount = input
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PricingError::InvalidAmount(input.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| PricingError::InvalidAmount(input.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Look up a supported currency by its ISO code.
///
/// # Errors
///
/// Returns `PricingError::UnknownCurrency` for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, PricingError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        _ => Err(PricingError::UnknownCurrency(code.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn vip_tier_gets_twenty_percent() {
        assert_eq!(tier_discount(&ClientTier::vip()), vip_discount());
        assert_eq!(tier_discount(&ClientTier::new("vip")), vip_discount());
        assert_eq!(tier_discount(&ClientTier::regular()), regular_discount());
        assert_eq!(tier_discount(&ClientTier::new("Gold")), regular_discount());
    }

    #[test]
    fn discounted_price_vip() -> TestResult {
        let price = Money::from_minor(10_000, USD);

        assert_eq!(
            discounted_price(&price, &vip_discount())?,
            Money::from_minor(8_000, USD)
        );

        Ok(())
    }

    #[test]
    fn discounted_price_regular() -> TestResult {
        let price = Money::from_minor(10_000, USD);

        assert_eq!(
            discounted_price(&price, &regular_discount())?,
            Money::from_minor(9_000, USD)
        );

        Ok(())
    }

    #[test]
    fn discounted_price_rounds_discount_half_away_from_zero() -> TestResult {
        // 10% of 0.05 is half a cent, which rounds up to a full cent off.
        let price = Money::from_minor(5, USD);

        assert_eq!(
            discounted_price(&price, &regular_discount())?,
            Money::from_minor(4, USD)
        );

        Ok(())
    }

    #[test]
    fn percent_of_minor_overflow_returns_error() {
        let percent = Percentage::from(2.0);
        let result = percent_of_minor(&percent, i64::MAX);

        assert!(matches!(result, Err(PricingError::PercentConversion)));
    }

    #[test]
    fn percent_of_minor_calculates_correctly() -> TestResult {
        let result = percent_of_minor(&vip_discount(), 12_345)?;

        assert_eq!(result, 2_469);

        Ok(())
    }

    #[test]
    fn percent_points_from_fraction() {
        assert_eq!(percent_points(vip_discount()).to_string(), "20");
        assert_eq!(percent_points(regular_discount()).to_string(), "10");
    }

    #[test]
    fn parse_amount_rounds_to_minor_units() -> TestResult {
        assert_eq!(parse_amount("1499.99", USD)?, Money::from_minor(149_999, USD));
        assert_eq!(parse_amount(" 20000 ", GBP)?, Money::from_minor(2_000_000, GBP));
        assert_eq!(parse_amount("-5", EUR)?, Money::from_minor(-500, EUR));

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_non_numbers() {
        assert!(matches!(
            parse_amount("ten", USD),
            Err(PricingError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("", USD),
            Err(PricingError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_currency_accepts_known_codes() -> TestResult {
        assert_eq!(parse_currency("usd")?, USD);
        assert_eq!(parse_currency("GBP")?, GBP);
        assert!(matches!(
            parse_currency("XYZ"),
            Err(PricingError::UnknownCurrency(_))
        ));

        Ok(())
    }
}
