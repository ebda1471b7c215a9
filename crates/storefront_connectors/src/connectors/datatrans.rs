pub mod transformers;

use common_utils::{
    errors::CustomResult,
    types::{AmountConvertor, StringMajorUnit, StringMajorUnitForConnector},
};
use storefront_domain_models::order::Order;
use storefront_interfaces::{
    api::{ConnectorCommon, PaymentConnector},
    errors::ConnectorError,
};
use transformers as datatrans;

use crate::{
    flows,
    types::{SharedCustomerVault, SharedGatewayClient, SharedOrderStore},
};

/// Datatrans connector.
///
/// Card entry happens on the gateway's hosted page, so no on-site form
/// fields are declared. Token-based repayment goes through the gateway's
/// XML endpoint, a separate client variant from the hosted flow.
pub struct Datatrans {
    amount_convertor: &'static (dyn AmountConvertor<Output = StringMajorUnit> + Sync),
    hosted_client: SharedGatewayClient,
    xml_client: SharedGatewayClient,
    order_store: SharedOrderStore,
    vault: SharedCustomerVault,
}

impl Datatrans {
    pub fn new(
        hosted_client: SharedGatewayClient,
        xml_client: SharedGatewayClient,
        order_store: SharedOrderStore,
        vault: SharedCustomerVault,
    ) -> Self {
        Self {
            amount_convertor: &StringMajorUnitForConnector,
            hosted_client,
            xml_client,
            order_store,
            vault,
        }
    }
}

impl ConnectorCommon for Datatrans {
    fn id(&self) -> &'static str {
        "datatrans"
    }
}

impl PaymentConnector for Datatrans {
    fn query(&self, order: Order) -> CustomResult<Order, ConnectorError> {
        flows::sync_order_status(
            self.id(),
            &datatrans::STATUS_MAP,
            self.hosted_client.as_ref(),
            self.order_store.as_ref(),
            order,
        )
    }

    fn repay(&self, order: Order) -> CustomResult<Order, ConnectorError> {
        flows::repay_with_token(
            self.id(),
            self.amount_convertor,
            self.xml_client.as_ref(),
            self.order_store.as_ref(),
            self.vault.as_ref(),
            order,
        )
    }
}
