//! Connector contract and the collaborator seams it consumes.

use std::collections::HashMap;

use common_utils::errors::CustomResult;
use storefront_domain_models::{
    customer::CustomerPaymentData,
    form::PaymentForm,
    gateway::{ChargeRequest, GatewayResponse, TransactionQuery},
    order::{Order, OrderSnapshot, SnapshotParts},
};

use crate::errors::{ConnectorError, GatewayError, StoreError};

/// Client handle onto one configured gateway endpoint.
///
/// Each call is a single blocking round trip; connection handling, retries
/// and timeouts belong to the client implementation, not to this layer.
/// Gateways commonly expose two variants of this interface, one for the
/// interactive/hosted flow and one for direct charging.
pub trait GatewayClient: Send + Sync {
    /// Submits a charge and returns the gateway's verdict.
    fn send(&self, request: &ChargeRequest) -> CustomResult<GatewayResponse, GatewayError>;

    /// Fetches the current state of a transaction.
    fn get_transaction(
        &self,
        query: &TransactionQuery,
    ) -> CustomResult<GatewayResponse, GatewayError>;
}

/// Shop-side order persistence.
pub trait OrderStore: Send + Sync {
    /// Loads the basket snapshot an order links to via its base id.
    fn snapshot(
        &self,
        base_id: &str,
        parts: SnapshotParts,
    ) -> CustomResult<OrderSnapshot, StoreError>;

    /// Persists the order and returns the stored representation.
    fn save(&self, order: Order) -> CustomResult<Order, StoreError>;
}

/// Read access to customer-scoped payment data.
pub trait CustomerVault: Send + Sync {
    /// Returns the data stored for the customer under the given purpose,
    /// or `None` when nothing is stored.
    fn payment_data(
        &self,
        customer_id: &str,
        purpose: &str,
    ) -> CustomResult<Option<CustomerPaymentData>, StoreError>;
}

/// Identity of a connector.
pub trait ConnectorCommon {
    /// Stable lowercase identifier of the connector.
    fn id(&self) -> &'static str;
}

/// The payment lifecycle a connector offers to the shop.
///
/// Connectors are stateless apart from their injected collaborators and can
/// be shared across concurrent calls; every call owns the order instance it
/// was given.
pub trait PaymentConnector: ConnectorCommon + Send + Sync {
    /// Declares the checkout form fields for the given order.
    ///
    /// `params` carries the raw request parameters of the checkout page,
    /// keyed by gateway-internal field names; values supplied there take
    /// precedence over any prefill. The default declares no on-site fields,
    /// which is correct for hosted-entry flows.
    fn payment_form(
        &self,
        _order: &Order,
        _params: &HashMap<String, String>,
    ) -> CustomResult<PaymentForm, ConnectorError> {
        Ok(PaymentForm::new())
    }

    /// Polls the gateway for the current payment status and persists the
    /// updated order. A response that maps to no status change is a valid
    /// terminal outcome.
    fn query(&self, order: Order) -> CustomResult<Order, ConnectorError>;

    /// Re-charges the order using the customer's stored card reference.
    ///
    /// Requires gateway support for token-based payment; connectors without
    /// it keep this default.
    fn repay(&self, order: Order) -> CustomResult<Order, ConnectorError> {
        Err(ConnectorError::NotImplemented(format!(
            "Token based repayment for {}",
            self.id()
        ))
        .into())
    }
}
