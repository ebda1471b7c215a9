use std::collections::HashMap;

use common_enums::{Currency, OrderPaymentStatus};
use common_utils::types::MinorUnit;
use serde::{Deserialize, Serialize};

use crate::address::Address;

/// The slice of an order the payment connectors read and update.
///
/// Connectors only ever advance `status_payment` with what a gateway
/// reported and record gateway metadata into `payment_attributes`; every
/// other order concern stays with the shop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    base_id: String,
    status_payment: OrderPaymentStatus,
    payment_attributes: HashMap<String, String>,
}

impl Order {
    pub fn new(id: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base_id: base_id.into(),
            status_payment: OrderPaymentStatus::Unset,
            payment_attributes: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reference to the basket snapshot carrying price and addresses.
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    pub fn status_payment(&self) -> OrderPaymentStatus {
        self.status_payment
    }

    pub fn set_status_payment(&mut self, status: OrderPaymentStatus) -> &mut Self {
        self.status_payment = status;
        self
    }

    pub fn payment_attribute(&self, key: &str) -> Option<&str> {
        self.payment_attributes.get(key).map(String::as_str)
    }

    /// Records a gateway-reported value into the persisted payment metadata.
    pub fn set_payment_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.payment_attributes.insert(key.into(), value.into());
        self
    }
}

/// Price snapshot of an order basket.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: MinorUnit,
    pub currency: Currency,
}

/// Which parts of the basket snapshot a lookup should materialize.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SnapshotParts {
    /// Customer and price only.
    Core,
    /// Customer, price and the billing/shipping address if one is attached.
    WithAddress,
}

/// Basket snapshot linked from an order via its `base_id`.
///
/// `address` is `None` both when the snapshot was fetched without
/// [`SnapshotParts::WithAddress`] and when the basket simply has no address
/// attached; absence is a value here, never an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub customer_id: String,
    pub price: Price,
    pub address: Option<Address>,
}
