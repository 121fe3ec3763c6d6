//! Wire types for the scoring service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A candidate transaction submitted for fraud scoring.
///
/// Field names follow the scoring service's contract: identifiers use the
/// `userID`/`deviceID` spelling, `amount` is a JSON number, and `location`
/// carries the longitude rendered alone as a bare string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionCandidate {
    #[serde(rename = "userID")]
    pub user_id: String,

    pub amount: f64,

    /// Longitude only. The model was trained on this single component.
    pub location: String,

    #[serde(rename = "deviceID")]
    pub device_id: String,

    /// Submission instant as Unix epoch seconds.
    pub time: i64,
}

/// The scoring service's verdict for one candidate.
///
/// Only `isFraud` is consulted downstream; anything else the model reports
/// rides along untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreVerdict {
    #[serde(rename = "isFraud")]
    pub is_fraud: bool,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
