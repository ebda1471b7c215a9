use serde::{Deserialize, Serialize};

/// Payment status of an order as tracked by the shop.
///
/// Statuses form a one-directional progression (`Unset` through `Received`);
/// the variant order reflects that progression so states can be compared.
/// Transitions are driven exclusively by gateway responses, never decided by
/// a connector on its own.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderPaymentStatus {
    /// No payment attempt has produced a status yet.
    #[default]
    Unset,
    /// The transaction was canceled before completion.
    Canceled,
    /// The gateway declined the payment.
    Refused,
    /// The gateway has accepted the transaction but not yet decided it.
    Pending,
    /// Funds are reserved; capture has not happened.
    Authorized,
    /// Funds have been received.
    Received,
}

/// Currencies accepted by the wired gateways.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Currency {
    AUD,
    CAD,
    CHF,
    DKK,
    EUR,
    GBP,
    JPY,
    NOK,
    PLN,
    SEK,
    USD,
}

impl Currency {
    /// Currencies whose minor unit equals the major unit.
    pub fn is_zero_decimal_currency(self) -> bool {
        matches!(self, Self::JPY)
    }

    pub fn number_of_digits_after_decimal_point(self) -> u32 {
        if self.is_zero_decimal_currency() {
            0
        } else {
            2
        }
    }
}

/// Semantic type tag of a checkout form field, both as rendered to the
/// shopper (`value_type`) and as transmitted to the gateway (`internal_type`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldValueType {
    #[default]
    #[serde(rename = "string")]
    #[strum(serialize = "string")]
    Text,
    Number,
    Integer,
}
