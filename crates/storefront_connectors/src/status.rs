//! Response-code to order-status mapping.

use common_enums::OrderPaymentStatus;
use storefront_domain_models::gateway::GatewayResponse;

/// Per-connector table translating gateway outcomes into order payment
/// statuses.
///
/// The code tables are connector configuration; only the lookup mechanics
/// are shared. A response that matches nothing yields `None` and the caller
/// leaves the order status untouched.
#[derive(Clone, Copy, Debug)]
pub struct PaymentStatusMap {
    /// Response codes reporting received funds.
    pub received_codes: &'static [&'static str],
    /// Response code reporting a successful authorization without capture.
    pub authorized_code: Option<&'static str>,
}

impl PaymentStatusMap {
    pub fn map(&self, response: &GatewayResponse) -> Option<OrderPaymentStatus> {
        if response.successful {
            let code = response.response_code.as_deref()?;
            if self.received_codes.contains(&code) {
                Some(OrderPaymentStatus::Received)
            } else if self.authorized_code == Some(code) {
                Some(OrderPaymentStatus::Authorized)
            } else {
                None
            }
        } else if response.pending == Some(true) {
            Some(OrderPaymentStatus::Pending)
        } else if response.canceled == Some(true) {
            Some(OrderPaymentStatus::Canceled)
        } else {
            None
        }
    }
}
