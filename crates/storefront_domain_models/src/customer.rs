use masking::Secret;
use serde::{Deserialize, Serialize};

/// Stored repayment credential of a customer.
///
/// Owned by the customer record; connectors read it to re-charge a stored
/// card reference and never create or modify it. The expiry pair is kept
/// because some gateways require it even for token-based charges.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerPaymentData {
    /// Opaque card reference issued by the gateway.
    pub token: Option<Secret<String>>,
    pub expiry_month: Option<Secret<String>>,
    pub expiry_year: Option<Secret<String>>,
}
