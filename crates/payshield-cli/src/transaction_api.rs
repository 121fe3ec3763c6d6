//! Client for the transaction creation service.
//!
//! This is the collaborator the form's submit step calls after a clean
//! verdict: `POST <base>/api/transactions` with a bearer token and the
//! creation payload.

use payshield_form::{CreationError, CreationRequest};

pub async fn create_transaction(
    client: &reqwest::Client,
    base_url: &str,
    request: CreationRequest,
    token: String,
) -> Result<(), CreationError> {
    let url = format!("{}/api/transactions", base_url.trim_end_matches('/'));
    client
        .post(url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
