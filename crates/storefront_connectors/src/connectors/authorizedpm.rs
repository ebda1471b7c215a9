pub mod transformers;

use std::collections::HashMap;

use common_utils::{
    errors::CustomResult,
    types::{AmountConvertor, StringMajorUnit, StringMajorUnitForConnector},
};
use error_stack::ResultExt;
use storefront_domain_models::{
    form::PaymentForm,
    order::{Order, SnapshotParts},
};
use storefront_interfaces::{
    api::{ConnectorCommon, PaymentConnector},
    configs::AuthorizedpmConfig,
    errors::ConnectorError,
};
use transformers as authorizedpm;

use crate::{
    flows,
    types::{SharedCustomerVault, SharedGatewayClient, SharedOrderStore},
};

/// Authorize.NET Direct Post Method connector.
///
/// Card entry happens on a form this connector declares; the card data is
/// posted by the shopper's browser straight to the gateway, so the declared
/// fields carry gateway-internal `x_*` wire names.
pub struct Authorizedpm {
    config: AuthorizedpmConfig,
    amount_convertor: &'static (dyn AmountConvertor<Output = StringMajorUnit> + Sync),
    hosted_client: SharedGatewayClient,
    direct_client: SharedGatewayClient,
    order_store: SharedOrderStore,
    vault: SharedCustomerVault,
}

impl Authorizedpm {
    pub fn new(
        config: AuthorizedpmConfig,
        hosted_client: SharedGatewayClient,
        direct_client: SharedGatewayClient,
        order_store: SharedOrderStore,
        vault: SharedCustomerVault,
    ) -> Self {
        Self {
            config,
            amount_convertor: &StringMajorUnitForConnector,
            hosted_client,
            direct_client,
            order_store,
            vault,
        }
    }
}

impl ConnectorCommon for Authorizedpm {
    fn id(&self) -> &'static str {
        "authorizedpm"
    }
}

impl PaymentConnector for Authorizedpm {
    fn payment_form(
        &self,
        order: &Order,
        params: &HashMap<String, String>,
    ) -> CustomResult<PaymentForm, ConnectorError> {
        let snapshot = self
            .order_store
            .snapshot(order.base_id(), SnapshotParts::WithAddress)
            .change_context(ConnectorError::OrderStoreFailed)?;

        let mut schema = authorizedpm::payment_schema();
        authorizedpm::prefill_from_address(
            &mut schema,
            snapshot.address.as_ref(),
            params,
            self.config.include_address,
        );

        let mut form = PaymentForm::new();
        for spec in schema.into_fields() {
            form.set_value(spec.code.clone(), spec);
        }
        Ok(form)
    }

    fn query(&self, order: Order) -> CustomResult<Order, ConnectorError> {
        flows::sync_order_status(
            self.id(),
            &authorizedpm::STATUS_MAP,
            self.hosted_client.as_ref(),
            self.order_store.as_ref(),
            order,
        )
    }

    fn repay(&self, order: Order) -> CustomResult<Order, ConnectorError> {
        flows::repay_with_token(
            self.id(),
            self.amount_convertor,
            self.direct_client.as_ref(),
            self.order_store.as_ref(),
            self.vault.as_ref(),
            order,
        )
    }
}
