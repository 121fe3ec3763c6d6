//! One-shot geolocation types.
//!
//! A position fix is modeled as a future supplied by the platform adapter;
//! this module defines the coordinate and error types that adapters and the
//! form controller share.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resolved position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Whether both components carry a usable value.
    ///
    /// A component equal to 0.0 or non-finite counts as absent, matching the
    /// presence rule applied at submission time.
    #[must_use]
    pub fn is_present(&self) -> bool {
        component_present(self.latitude) && component_present(self.longitude)
    }
}

#[allow(clippy::float_cmp)]
fn component_present(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Why a position fix did not resolve.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The host has no geolocation capability at all.
    #[error("geolocation capability is not available")]
    Unsupported,

    /// The capability exists but the fix was denied or unavailable.
    #[error("position fix failed: {0}")]
    Failed(String),
}

/// The position fix for hosts without any geolocation capability.
///
/// Resolves immediately to [`LocationError::Unsupported`]; pass it to the
/// form controller's mount where a real adapter would supply a lookup.
#[must_use]
pub fn unsupported_fix() -> std::future::Ready<Result<Coordinates, LocationError>> {
    std::future::ready(Err(LocationError::Unsupported))
}
