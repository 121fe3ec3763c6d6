//! IP-geolocation adapter for the position fix.
//!
//! Queries an ip-api compatible endpoint (`status`/`lat`/`lon`/`message`
//! wire shape) and converts the answer into the coordinate type the form
//! consumes.

use payshield_core::{Coordinates, LocationError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

/// One-shot position fix against an ip-api compatible endpoint.
///
/// Every failure maps to [`LocationError::Failed`]; the form turns that into
/// its fixed user-facing message and logs the cause.
pub async fn fetch_position(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Coordinates, LocationError> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| LocationError::Failed(e.to_string()))?
        .error_for_status()
        .map_err(|e| LocationError::Failed(e.to_string()))?;

    let payload: IpApiResponse = response
        .json()
        .await
        .map_err(|e| LocationError::Failed(e.to_string()))?;

    if payload.status != "success" {
        let reason = payload
            .message
            .unwrap_or_else(|| format!("lookup status was '{}'", payload.status));
        return Err(LocationError::Failed(reason));
    }

    match (payload.lat, payload.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(LocationError::Failed(
            "lookup succeeded without coordinates".to_owned(),
        )),
    }
}
