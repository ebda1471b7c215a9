use serde::{Deserialize, Serialize};

/// Billing/shipping address attached to a basket snapshot.
///
/// Fields default to the empty string when the shop has no value; the
/// connectors only use them to prefill shopper-visible form defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub postal: String,
    pub country_code: String,
    pub telephone: String,
    pub company: String,
    pub email: String,
}
