#![allow(clippy::unwrap_used)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use common_enums::{Currency, OrderPaymentStatus};
use common_utils::{errors::CustomResult, types::MinorUnit};
use masking::{PeekInterface, Secret};
use serde_json::json;
use storefront_connectors::{Authorizedpm, Datatrans};
use storefront_domain_models::{
    address::Address,
    customer::CustomerPaymentData,
    gateway::{ChargeRequest, GatewayResponse, TransactionQuery},
    order::{Order, OrderSnapshot, Price, SnapshotParts},
};
use storefront_interfaces::{
    api::{CustomerVault, GatewayClient, OrderStore, PaymentConnector},
    configs::AuthorizedpmConfig,
    errors::{ConnectorError, GatewayError, StoreError},
};

struct StubGateway {
    response: GatewayResponse,
    sends: AtomicUsize,
    queries: AtomicUsize,
    last_charge: Mutex<Option<ChargeRequest>>,
}

impl StubGateway {
    fn new(response: GatewayResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            sends: AtomicUsize::new(0),
            queries: AtomicUsize::new(0),
            last_charge: Mutex::new(None),
        })
    }

    fn unused() -> Arc<Self> {
        Self::new(GatewayResponse::default())
    }
}

impl GatewayClient for StubGateway {
    fn send(&self, request: &ChargeRequest) -> CustomResult<GatewayResponse, GatewayError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        *self.last_charge.lock().unwrap() = Some(request.clone());
        Ok(self.response.clone())
    }

    fn get_transaction(
        &self,
        _query: &TransactionQuery,
    ) -> CustomResult<GatewayResponse, GatewayError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

struct StubStore {
    snapshot: OrderSnapshot,
    saves: AtomicUsize,
}

impl StubStore {
    fn new(snapshot: OrderSnapshot) -> Arc<Self> {
        Arc::new(Self {
            snapshot,
            saves: AtomicUsize::new(0),
        })
    }
}

impl OrderStore for StubStore {
    fn snapshot(
        &self,
        _base_id: &str,
        _parts: SnapshotParts,
    ) -> CustomResult<OrderSnapshot, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&self, order: Order) -> CustomResult<Order, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(order)
    }
}

struct StubVault(Option<CustomerPaymentData>);

impl CustomerVault for StubVault {
    fn payment_data(
        &self,
        _customer_id: &str,
        _purpose: &str,
    ) -> CustomResult<Option<CustomerPaymentData>, StoreError> {
        Ok(self.0.clone())
    }
}

fn snapshot_without_address() -> OrderSnapshot {
    OrderSnapshot {
        customer_id: "cust-7".to_string(),
        price: Price {
            amount: MinorUnit::new(1050),
            currency: Currency::CHF,
        },
        address: None,
    }
}

fn snapshot_with_address() -> OrderSnapshot {
    OrderSnapshot {
        address: Some(Address {
            first_name: "Erin".to_string(),
            last_name: "Muster".to_string(),
            city: "Zurich".to_string(),
            ..Default::default()
        }),
        ..snapshot_without_address()
    }
}

fn repay_data(token: &str) -> CustomerPaymentData {
    CustomerPaymentData {
        token: Some(Secret::new(token.to_string())),
        expiry_month: Some(Secret::new("09".to_string())),
        expiry_year: Some(Secret::new("2026".to_string())),
    }
}

fn datatrans(
    gateway: &Arc<StubGateway>,
    store: &Arc<StubStore>,
    vault: Option<CustomerPaymentData>,
) -> Datatrans {
    Datatrans::new(
        gateway.clone(),
        gateway.clone(),
        store.clone(),
        Arc::new(StubVault(vault)),
    )
}

#[test]
fn query_maps_settlement_code_to_received() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: true,
        response_code: Some("2".to_string()),
        transaction_reference: Some("ref-1".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, None);

    let order = connector.query(Order::new("41", "base-41")).unwrap();

    assert_eq!(order.status_payment(), OrderPaymentStatus::Received);
    assert_eq!(order.payment_attribute("TRANSACTIONID"), Some("ref-1"));
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.queries.load(Ordering::SeqCst), 1);
}

#[test]
fn query_without_mapped_outcome_still_records_the_reference() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: false,
        transaction_reference: Some("ref-9".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, None);

    let order = connector.query(Order::new("41", "base-41")).unwrap();

    assert_eq!(order.status_payment(), OrderPaymentStatus::Unset);
    assert_eq!(order.payment_attribute("TRANSACTIONID"), Some("ref-9"));
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
}

#[test]
fn repay_charges_the_stored_token_and_marks_the_order_received() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: true,
        transaction_reference: Some("ref-555".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, Some(repay_data("tok_1")));

    let order = connector.repay(Order::new("41", "base-41")).unwrap();

    assert_eq!(order.status_payment(), OrderPaymentStatus::Received);
    assert_eq!(order.payment_attribute("TRANSACTIONID"), Some("ref-555"));

    let charge = gateway.last_charge.lock().unwrap().clone().unwrap();
    assert_eq!(charge.transaction_id, "41");
    assert_eq!(charge.currency, Currency::CHF);
    assert_eq!(charge.amount.get_amount_as_string(), "10.50");
    assert_eq!(charge.card_reference.peek(), "tok_1");
    assert!(!charge.payment_page);
    let expiry = charge.card_expiry.unwrap();
    assert_eq!(expiry.month.peek(), "09");
    assert_eq!(expiry.year.peek(), "2026");
}

#[test]
fn repay_without_full_expiry_attaches_none() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: true,
        transaction_reference: Some("ref-556".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let stored = CustomerPaymentData {
        token: Some(Secret::new("tok_1".to_string())),
        expiry_month: Some(Secret::new("09".to_string())),
        expiry_year: None,
    };
    let connector = datatrans(&gateway, &store, Some(stored));

    connector.repay(Order::new("41", "base-41")).unwrap();

    let charge = gateway.last_charge.lock().unwrap().clone().unwrap();
    assert!(charge.card_expiry.is_none());
}

#[test]
fn repay_without_stored_configuration_fails_before_any_gateway_call() {
    let gateway = StubGateway::unused();
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, None);

    let error = connector.repay(Order::new("41", "base-41")).unwrap_err();

    assert!(matches!(
        error.current_context(),
        ConnectorError::MissingRepayData { customer_id } if customer_id == "cust-7"
    ));
    assert_eq!(gateway.sends.load(Ordering::SeqCst), 0);
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);
}

#[test]
fn repay_with_configuration_lacking_a_token_fails_before_any_gateway_call() {
    let gateway = StubGateway::unused();
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, Some(CustomerPaymentData::default()));

    let error = connector.repay(Order::new("41", "base-41")).unwrap_err();

    assert!(matches!(
        error.current_context(),
        ConnectorError::MissingToken { customer_id } if customer_id == "cust-7"
    ));
    assert_eq!(gateway.sends.load(Ordering::SeqCst), 0);
}

#[test]
fn repay_without_any_reference_is_incomplete_and_keeps_the_raw_payload() {
    let raw = json!({"errorCode": "1403", "errorMessage": "declined"});
    let gateway = StubGateway::new(GatewayResponse {
        successful: false,
        raw: raw.clone(),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, Some(repay_data("tok_1")));

    let error = connector.repay(Order::new("41", "base-41")).unwrap_err();

    assert!(matches!(
        error.current_context(),
        ConnectorError::IncompletePayment { raw: payload } if *payload == raw
    ));
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);
}

#[test]
fn repay_with_a_declined_reference_carries_the_gateway_message() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: false,
        transaction_reference: Some("ref-7".to_string()),
        message: Some("card expired".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, Some(repay_data("tok_1")));

    let error = connector.repay(Order::new("41", "base-41")).unwrap_err();

    assert!(matches!(
        error.current_context(),
        ConnectorError::PaymentFailed { message } if message == "card expired"
    ));
}

#[test]
fn repay_with_a_decline_lacking_a_message_carries_an_empty_one() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: false,
        transaction_reference: Some("ref-7".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, Some(repay_data("tok_1")));

    let error = connector.repay(Order::new("41", "base-41")).unwrap_err();

    assert!(matches!(
        error.current_context(),
        ConnectorError::PaymentFailed { message } if message.is_empty()
    ));
}

#[test]
fn repay_treats_a_pending_verdict_like_a_successful_one() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: false,
        pending: Some(true),
        transaction_reference: Some("ref-8".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector = datatrans(&gateway, &store, Some(repay_data("tok_1")));

    let order = connector.repay(Order::new("41", "base-41")).unwrap();

    assert_eq!(order.status_payment(), OrderPaymentStatus::Received);
    assert_eq!(order.payment_attribute("TRANSACTIONID"), Some("ref-8"));
}

#[test]
fn datatrans_declares_no_onsite_form_fields() {
    let gateway = StubGateway::unused();
    let store = StubStore::new(snapshot_with_address());
    let connector = datatrans(&gateway, &store, None);

    let form = connector
        .payment_form(&Order::new("41", "base-41"), &HashMap::new())
        .unwrap();
    assert!(form.is_empty());
}

fn authorizedpm(store: &Arc<StubStore>, include_address: bool) -> Authorizedpm {
    Authorizedpm::new(
        AuthorizedpmConfig { include_address },
        StubGateway::unused(),
        StubGateway::unused(),
        store.clone(),
        Arc::new(StubVault(None)),
    )
}

#[test]
fn authorizedpm_form_prefills_identity_from_the_basket_address() {
    let store = StubStore::new(snapshot_with_address());
    let connector = authorizedpm(&store, false);

    let form = connector
        .payment_form(&Order::new("41", "base-41"), &HashMap::new())
        .unwrap();

    assert_eq!(
        form.value("payment.firstname").unwrap().default_value,
        "Erin"
    );
    assert_eq!(
        form.value("payment.lastname").unwrap().default_value,
        "Muster"
    );
    assert_eq!(form.value("payment.city").unwrap().default_value, "");
}

#[test]
fn authorizedpm_form_with_include_address_prefills_contact_fields() {
    let store = StubStore::new(snapshot_with_address());
    let connector = authorizedpm(&store, true);

    let form = connector
        .payment_form(&Order::new("41", "base-41"), &HashMap::new())
        .unwrap();

    assert_eq!(form.value("payment.city").unwrap().default_value, "Zurich");
}

#[test]
fn authorizedpm_form_without_an_address_stays_blank() {
    let store = StubStore::new(snapshot_without_address());
    let connector = authorizedpm(&store, true);

    let form = connector
        .payment_form(&Order::new("41", "base-41"), &HashMap::new())
        .unwrap();

    assert!(form.values().all(|spec| spec.default_value.is_empty()));
    assert_eq!(form.values().count(), 12);
}

#[test]
fn connectors_are_usable_behind_trait_objects() {
    let gateway = StubGateway::new(GatewayResponse {
        successful: true,
        response_code: Some("1".to_string()),
        transaction_reference: Some("ref-2".to_string()),
        ..Default::default()
    });
    let store = StubStore::new(snapshot_without_address());
    let connector: Arc<dyn PaymentConnector> =
        Arc::new(datatrans(&gateway, &store, None));

    let order = connector.query(Order::new("41", "base-41")).unwrap();
    assert_eq!(order.status_payment(), OrderPaymentStatus::Authorized);
}
