//! Error taxonomy of the connector layer.
//!
//! Connector failures are typed so callers can branch on kind: the `repay`
//! preconditions fail before any gateway round trip, a gateway decline is
//! distinguishable from an ambiguous no-reference outcome, and collaborator
//! failures keep their own error types until a connector attaches context.

/// Fatal failures surfaced by a payment connector.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// No repayment configuration is stored for the customer.
    #[error("No reoccurring payment data available for customer \"{customer_id}\"")]
    MissingRepayData {
        /// Customer the lookup ran for.
        customer_id: String,
    },

    /// A repayment configuration exists but carries no card token.
    #[error("No payment token available for customer \"{customer_id}\"")]
    MissingToken {
        /// Customer the configuration belongs to.
        customer_id: String,
    },

    /// The gateway neither confirmed the charge nor returned a transaction
    /// reference; the order needs manual reconciliation.
    #[error("Token based payment incomplete: {raw}")]
    IncompletePayment {
        /// Raw gateway payload kept for diagnostics.
        raw: serde_json::Value,
    },

    /// The gateway explicitly declined the charge.
    #[error("Token based payment failed: {message}")]
    PaymentFailed {
        /// Gateway-supplied message, empty when the gateway sent none.
        message: String,
    },

    /// A gateway round trip could not be completed.
    #[error("Failed to communicate with the payment gateway")]
    GatewayRequestFailed,

    /// The order store could not load or persist a record.
    #[error("Failed to access the order store")]
    OrderStoreFailed,

    /// The order amount could not be expressed in the gateway's unit.
    #[error("Failed to convert the order amount")]
    AmountConversionFailed,

    /// A value required to build a gateway request was missing.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// Name of the missing field.
        field_name: &'static str,
    },

    /// The connector does not support the requested operation.
    #[error("{0} is not implemented")]
    NotImplemented(String),
}

/// Failures reported by a gateway client.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a usable response.
    #[error("Gateway request could not be sent")]
    RequestFailed,

    /// The gateway answered with something the client could not parse.
    #[error("Gateway response could not be parsed")]
    MalformedResponse,
}

/// Failures reported by the shop-side stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("Record not found")]
    NotFound,

    /// The underlying storage could not be reached.
    #[error("Storage access failed")]
    AccessFailed,
}
