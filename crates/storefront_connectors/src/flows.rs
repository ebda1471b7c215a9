//! The lifecycle operations shared by all connectors.
//!
//! Connectors differ in their status tables, field schemas and which client
//! variant they charge through; the operation sequencing lives here.

use common_enums::OrderPaymentStatus;
use common_utils::{
    errors::CustomResult,
    types::{AmountConvertor, StringMajorUnit},
};
use error_stack::ResultExt;
use storefront_domain_models::{
    gateway::{CardExpiry, ChargeRequest, TransactionQuery},
    order::{Order, SnapshotParts},
};
use storefront_interfaces::{
    api::{CustomerVault, GatewayClient, OrderStore},
    consts,
    errors::ConnectorError,
};

use crate::status::PaymentStatusMap;

/// Polls the gateway for the order's transaction state, applies the
/// connector's status table and persists the order.
///
/// The transaction reference is recorded regardless of the status outcome,
/// and a response that maps to no status change still persists cleanly.
pub(crate) fn sync_order_status(
    connector: &'static str,
    status_map: &PaymentStatusMap,
    client: &dyn GatewayClient,
    store: &dyn OrderStore,
    mut order: Order,
) -> CustomResult<Order, ConnectorError> {
    let query = TransactionQuery {
        transaction_id: order.id().to_string(),
    };
    let response = client
        .get_transaction(&query)
        .change_context(ConnectorError::GatewayRequestFailed)?;

    if let Some(status) = status_map.map(&response) {
        tracing::debug!(connector, order_id = %order.id(), %status, "gateway reported payment status");
        order.set_status_payment(status);
    }
    order.set_payment_attribute(
        consts::TRANSACTION_ID_KEY,
        response.reference().unwrap_or_default(),
    );

    store
        .save(order)
        .change_context(ConnectorError::OrderStoreFailed)
}

/// Charges the order again through the customer's stored card reference.
///
/// Both preconditions fail before any gateway round trip. A `successful` or
/// `pending` verdict marks the order received; a verdict without any
/// transaction reference is ambiguous and kept apart from a clean decline.
pub(crate) fn repay_with_token(
    connector: &'static str,
    amount_convertor: &dyn AmountConvertor<Output = StringMajorUnit>,
    direct_client: &dyn GatewayClient,
    store: &dyn OrderStore,
    vault: &dyn CustomerVault,
    mut order: Order,
) -> CustomResult<Order, ConnectorError> {
    let snapshot = store
        .snapshot(order.base_id(), SnapshotParts::Core)
        .change_context(ConnectorError::OrderStoreFailed)?;
    let customer_id = snapshot.customer_id;

    let Some(stored) = vault
        .payment_data(&customer_id, consts::REPAY_PURPOSE)
        .change_context(ConnectorError::OrderStoreFailed)?
    else {
        return Err(ConnectorError::MissingRepayData { customer_id }.into());
    };
    let Some(token) = stored.token else {
        return Err(ConnectorError::MissingToken { customer_id }.into());
    };

    let amount = amount_convertor
        .convert(snapshot.price.amount, snapshot.price.currency)
        .change_context(ConnectorError::AmountConversionFailed)?;

    let card_expiry = match (stored.expiry_month, stored.expiry_year) {
        (Some(month), Some(year)) => {
            let expiry = CardExpiry { month, year };
            if expiry.is_expired(time::OffsetDateTime::now_utc()) {
                tracing::warn!(connector, %customer_id, "stored card reference is past its expiry date");
            }
            Some(expiry)
        }
        _ => None,
    };

    let request = ChargeRequest {
        transaction_id: order.id().to_string(),
        currency: snapshot.price.currency,
        amount,
        card_reference: token,
        payment_page: false,
        card_expiry,
    };
    let response = direct_client
        .send(&request)
        .change_context(ConnectorError::GatewayRequestFailed)?;

    if response.successful || response.pending == Some(true) {
        order.set_payment_attribute(
            consts::TRANSACTION_ID_KEY,
            response.reference().unwrap_or_default(),
        );
        order.set_status_payment(OrderPaymentStatus::Received);
        tracing::info!(connector, order_id = %order.id(), "token based payment submitted");
        store
            .save(order)
            .change_context(ConnectorError::OrderStoreFailed)
    } else if response.reference().is_none() {
        Err(ConnectorError::IncompletePayment { raw: response.raw }.into())
    } else {
        Err(ConnectorError::PaymentFailed {
            message: response.message.unwrap_or_default(),
        }
        .into())
    }
}
