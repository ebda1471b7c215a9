use common_enums::Currency;
use common_utils::types::StringMajorUnit;
use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

/// Card expiry attached to a token-based charge when the gateway requires it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardExpiry {
    pub month: Secret<String>,
    pub year: Secret<String>,
}

impl CardExpiry {
    /// Whether the expiry lies before the given point in time.
    ///
    /// Unparsable stored values count as expired.
    pub fn is_expired(&self, now: time::OffsetDateTime) -> bool {
        let month: u8 = match self.month.peek().trim().parse() {
            Ok(month @ 1..=12) => month,
            _ => return true,
        };
        let year: i32 = match self.year.peek().trim().parse() {
            Ok(year) => year,
            Err(_) => return true,
        };
        (year, month) < (now.year(), u8::from(now.month()))
    }
}

/// A direct (non-hosted-page) charge submitted through a gateway client.
#[derive(Clone, Debug, Serialize)]
pub struct ChargeRequest {
    pub transaction_id: String,
    pub currency: Currency,
    pub amount: StringMajorUnit,
    /// Stored card reference to charge.
    pub card_reference: Secret<String>,
    /// `false` requests a direct charge instead of a hosted payment page.
    pub payment_page: bool,
    pub card_expiry: Option<CardExpiry>,
}

/// Filter for looking up the current state of a transaction.
#[derive(Clone, Debug, Serialize)]
pub struct TransactionQuery {
    pub transaction_id: String,
}

/// Result of a gateway round trip, normalized across gateways.
///
/// `pending` and `canceled` are capability-conditional: a gateway client
/// that cannot answer the predicate reports `None`, which readers must
/// treat as "not known to be pending/canceled".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub successful: bool,
    pub pending: Option<bool>,
    pub canceled: Option<bool>,
    /// Gateway-specific outcome code.
    pub response_code: Option<String>,
    /// Opaque transaction token, when the gateway issued one.
    pub transaction_reference: Option<String>,
    /// Human-readable gateway message, when one was returned.
    pub message: Option<String>,
    /// Raw response payload kept for diagnostics.
    pub raw: serde_json::Value,
}

impl GatewayResponse {
    /// The transaction reference, with empty strings treated as absent.
    pub fn reference(&self) -> Option<&str> {
        self.transaction_reference
            .as_deref()
            .filter(|reference| !reference.is_empty())
    }
}
