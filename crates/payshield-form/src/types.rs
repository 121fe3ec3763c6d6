//! Form state and the creation-collaborator contract.

use payshield_core::Coordinates;
use serde::Serialize;

/// Field state of the transaction form.
///
/// Only `amount` is user-editable. The identifiers and location are
/// populated at mount time and persist for the session; `error` is the
/// single slot every failure message lands in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub amount: String,
    pub device_id: String,
    pub user_id: String,
    pub location: Option<Coordinates>,
    pub error: Option<String>,
}

/// Payload handed to the transaction creation collaborator.
///
/// Unlike the scoring candidate, creation receives the raw amount entry and
/// the full coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    pub amount: String,
    pub device_location: Coordinates,
    pub device_id: String,
}

/// Error type of the injected creation collaborator. Its wire protocol is
/// out of this crate's scope, so failures arrive fully erased.
pub type CreationError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_request_serializes_with_camel_case_fields() {
        let request = CreationRequest {
            amount: "125.50".to_owned(),
            device_location: Coordinates {
                latitude: 40.4168,
                longitude: -3.7038,
            },
            device_id: "device-1".to_owned(),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "amount": "125.50",
                "deviceLocation": { "latitude": 40.4168, "longitude": -3.7038 },
                "deviceId": "device-1"
            })
        );
    }
}
