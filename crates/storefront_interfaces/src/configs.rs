use serde::Deserialize;

/// Construction-time configuration of the Authorize.NET DPM connector.
///
/// Passed explicitly when the connector is built; there is no ambient
/// service-configuration lookup.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthorizedpmConfig {
    /// Prefill the address-related form fields from the basket address.
    #[serde(default)]
    pub include_address: bool,
}
