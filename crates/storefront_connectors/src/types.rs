use std::sync::Arc;

use storefront_interfaces::api::{CustomerVault, GatewayClient, OrderStore};

pub type SharedGatewayClient = Arc<dyn GatewayClient>;
pub type SharedOrderStore = Arc<dyn OrderStore>;
pub type SharedCustomerVault = Arc<dyn CustomerVault>;
