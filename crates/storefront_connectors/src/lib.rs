//! Payment provider connectors.
//!
//! Each connector adapts one gateway to the shop's payment lifecycle:
//! declaring the checkout form fields, translating gateway outcomes into
//! order payment statuses and driving the query/repay operations through an
//! injected gateway client.

pub mod connectors;
pub(crate) mod flows;
pub mod status;
pub mod types;

pub use connectors::{Authorizedpm, Datatrans};
