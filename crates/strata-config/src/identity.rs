// crates/strata-config/src/identity.rs
// ============================================================================
// Module: Controller Identity
// Description: Identity settings for the remote controller integration.
// Purpose: Absorb malformed delivery locations without failing configuration.
// Dependencies: crate::resolver, url
// ============================================================================

//! ## Overview
//! The controller integration is identified by a delivery location (a URI
//! the host reports into) and a fleet identifier scoped to that location. A
//! missing or unparsable location is not an error: the dependent fleet
//! identifier simply resolves to absent and the rest of configuration stays
//! usable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use url::Url;

use crate::resolver::Settings;

// ============================================================================
// SECTION: Well-Known Paths
// ============================================================================

/// Path of the controller delivery-location setting.
pub const DELIVERY_LOCATION: &str = "controller.delivery_location";

/// Path of the controller fleet-identifier setting.
pub const FLEET_ID: &str = "controller.fleet_id";

// ============================================================================
// SECTION: Identity
// ============================================================================

/// Resolved controller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerIdentity {
    /// Parsed delivery location, when configured and well-formed.
    pub delivery_location: Option<Url>,
    /// Fleet identifier; absent whenever the delivery location is absent or
    /// malformed.
    pub fleet_id: Option<String>,
}

impl ControllerIdentity {
    /// Resolves the controller identity from a settings view.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let delivery_location = settings
            .get_opt_str(DELIVERY_LOCATION)
            .and_then(|text| Url::parse(&text).ok());
        let fleet_id = if delivery_location.is_some() {
            settings.get_opt_str(FLEET_ID).filter(|id| !id.is_empty())
        } else {
            None
        };
        Self {
            delivery_location,
            fleet_id,
        }
    }
}
