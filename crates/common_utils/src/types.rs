//! Amount units and the conversions between them.
//!
//! Order prices are stored in the currency's minor unit. The wrapped gateway
//! clients expect amounts as decimal strings in major units, so connectors
//! carry an [`AmountConvertor`] and convert at the boundary.

use common_enums::Currency;
use serde::{Deserialize, Serialize};

use crate::errors::{AmountConversionError, CustomResult};

/// An amount in the currency's minor unit (cents, rappen, ...).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An amount rendered as a decimal string in the currency's major unit,
/// e.g. `"10.50"` for CHF 10.50 or `"1050"` for JPY 1050.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StringMajorUnit(String);

impl StringMajorUnit {
    pub fn get_amount_as_string(&self) -> &str {
        &self.0
    }
}

/// Conversion from the stored minor-unit amount into whatever representation
/// a particular gateway client expects.
pub trait AmountConvertor: Send {
    /// The gateway-facing amount representation.
    type Output;

    /// Convert `amount` of `currency` into the gateway representation.
    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> CustomResult<Self::Output, AmountConversionError>;
}

/// Converts minor units into a decimal major-unit string, respecting the
/// currency's exponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringMajorUnitForConnector;

impl AmountConvertor for StringMajorUnitForConnector {
    type Output = StringMajorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> CustomResult<StringMajorUnit, AmountConversionError> {
        let minor = amount.get_amount_as_i64();
        if minor < 0 {
            return Err(AmountConversionError::ConversionFailed {
                reason: "negative amounts cannot be charged",
            }
            .into());
        }
        let exponent = currency.number_of_digits_after_decimal_point();
        let rendered = if exponent == 0 {
            minor.to_string()
        } else {
            let divisor = 10i64.pow(exponent);
            format!(
                "{}.{:0width$}",
                minor / divisor,
                minor % divisor,
                width = exponent as usize
            )
        };
        Ok(StringMajorUnit(rendered))
    }
}
