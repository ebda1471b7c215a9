use crate::status::PaymentStatusMap;

// Codes 2, 3 and 21 report settled funds; code 1 is an authorization the
// merchant still has to settle.
pub(super) const STATUS_MAP: PaymentStatusMap = PaymentStatusMap {
    received_codes: &["2", "3", "21"],
    authorized_code: Some("1"),
};

#[cfg(test)]
mod tests {
    use common_enums::OrderPaymentStatus;
    use storefront_domain_models::gateway::GatewayResponse;

    use super::*;

    fn successful(code: &str) -> GatewayResponse {
        GatewayResponse {
            successful: true,
            response_code: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn settlement_codes_report_received() {
        for code in ["2", "3", "21"] {
            assert_eq!(
                STATUS_MAP.map(&successful(code)),
                Some(OrderPaymentStatus::Received),
            );
        }
    }

    #[test]
    fn authorization_code_reports_authorized() {
        assert_eq!(
            STATUS_MAP.map(&successful("1")),
            Some(OrderPaymentStatus::Authorized),
        );
    }

    #[test]
    fn other_codes_on_success_report_nothing() {
        assert_eq!(STATUS_MAP.map(&successful("104")), None);
    }

    #[test]
    fn pending_and_canceled_predicates_apply() {
        let pending = GatewayResponse {
            pending: Some(true),
            ..Default::default()
        };
        assert_eq!(
            STATUS_MAP.map(&pending),
            Some(OrderPaymentStatus::Pending)
        );

        let canceled = GatewayResponse {
            canceled: Some(true),
            ..Default::default()
        };
        assert_eq!(
            STATUS_MAP.map(&canceled),
            Some(OrderPaymentStatus::Canceled)
        );
    }
}
