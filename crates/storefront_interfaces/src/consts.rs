//! Constants shared by the connectors.

/// Payment-attribute key the gateway transaction reference is stored under.
pub const TRANSACTION_ID_KEY: &str = "TRANSACTIONID";

/// Vault purpose under which repayment credentials are filed.
pub const REPAY_PURPOSE: &str = "repay";
