//! Domain data shared between the shop side and the payment connectors.
//!
//! The types here mirror the narrow slice of the shop's order model the
//! connectors actually touch, plus the request/response shapes exchanged
//! with the wrapped gateway clients and the checkout form schema types.

pub mod address;
pub mod customer;
pub mod form;
pub mod gateway;
pub mod order;

pub use address::Address;
pub use customer::CustomerPaymentData;
pub use form::{FieldSchema, FieldSpec, PaymentForm};
pub use gateway::{CardExpiry, ChargeRequest, GatewayResponse, TransactionQuery};
pub use order::{Order, OrderSnapshot, Price, SnapshotParts};
