//! The submission flow.
//!
//! `TransactionForm` mirrors an interactive form: mount populates identity
//! and location, the user edits the amount, and submit runs validation,
//! scoring, and creation in a strictly sequential chain. Messages shown to
//! the user are fixed strings; only a scoring rejection carries service
//! text through verbatim.

use std::future::Future;

use chrono::Utc;
use payshield_core::{
    resolve_device_id, resolve_user_id, Coordinates, IdentityStore, LocationError,
};
use payshield_scoring::{ScoringClient, ScoringError, TransactionCandidate};

use crate::types::{CreationError, CreationRequest, FormState};

const MISSING_FIELDS: &str = "All fields are required, including location and user ID.";
const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser.";
const LOCATION_REQUIRED: &str = "Location access is required for transactions.";
const FLAGGED_AS_FRAUD: &str = "Transaction flagged as fraudulent. Please try again.";
const SUBMIT_FAILED: &str = "Transaction failed. Try again.";

/// Controller for one transaction form instance.
///
/// Generic over the identity store so tests can run against
/// [`payshield_core::MemoryStore`] while the CLI uses the file-backed one.
pub struct TransactionForm<S> {
    state: FormState,
    store: S,
    scoring: ScoringClient,
    token: String,
}

impl<S: IdentityStore> TransactionForm<S> {
    #[must_use]
    pub fn new(store: S, scoring: ScoringClient, token: impl Into<String>) -> Self {
        Self {
            state: FormState::default(),
            store,
            scoring,
            token: token.into(),
        }
    }

    /// Read access to the current field state.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Controlled binding for the amount input.
    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.state.amount = raw.into();
    }

    /// Populates identity and location state.
    ///
    /// Both identifiers are resolved from the store (minted on first use),
    /// then the one-shot `position_fix` is awaited. A fix that never
    /// resolves is not raced against a timeout; the platform adapter owns
    /// that behavior. On [`LocationError::Unsupported`] or a failed fix the
    /// coordinates stay unset and the matching message lands in the error
    /// slot; the only recovery is a fresh mount.
    pub async fn mount<F>(&mut self, position_fix: F)
    where
        F: Future<Output = Result<Coordinates, LocationError>>,
    {
        self.state.user_id = resolve_user_id(&self.store);
        self.state.device_id = resolve_device_id(&self.store);

        match position_fix.await {
            Ok(fix) => self.state.location = Some(fix),
            Err(LocationError::Unsupported) => {
                self.state.error = Some(GEOLOCATION_UNSUPPORTED.to_owned());
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to obtain a position fix");
                self.state.error = Some(LOCATION_REQUIRED.to_owned());
            }
        }
    }

    /// Runs one submission attempt.
    ///
    /// Clears any prior error, validates field presence, scores the
    /// candidate, and on a negative verdict hands a [`CreationRequest`] and
    /// the authentication token to `create`. `on_success` fires after
    /// creation succeeds, then the amount resets; identity and location
    /// persist for the session. The exclusive receiver doubles as the
    /// submit guard: a second attempt cannot start while one is in flight.
    pub async fn submit<C, Fut, G>(&mut self, create: C, on_success: G)
    where
        C: FnOnce(CreationRequest, String) -> Fut,
        Fut: Future<Output = Result<(), CreationError>>,
        G: FnOnce(),
    {
        self.state.error = None;

        let Some((amount, location)) = self.validated_input() else {
            self.state.error = Some(MISSING_FIELDS.to_owned());
            return;
        };

        let candidate = TransactionCandidate {
            user_id: self.state.user_id.clone(),
            amount,
            location: location.longitude.to_string(),
            device_id: self.state.device_id.clone(),
            time: Utc::now().timestamp(),
        };

        let verdict = match self.scoring.score(&candidate).await {
            Ok(verdict) => verdict,
            Err(ScoringError::Rejected { body, .. }) => {
                self.state.error = Some(format!("Transaction failed: {body}"));
                return;
            }
            Err(error) => {
                tracing::error!(error = %error, "scoring request failed");
                self.state.error = Some(SUBMIT_FAILED.to_owned());
                return;
            }
        };

        if verdict.is_fraud {
            self.state.error = Some(FLAGGED_AS_FRAUD.to_owned());
            return;
        }

        let request = CreationRequest {
            amount: self.state.amount.clone(),
            device_location: location,
            device_id: self.state.device_id.clone(),
        };

        match create(request, self.token.clone()).await {
            Ok(()) => {
                on_success();
                self.state.amount.clear();
            }
            Err(error) => {
                tracing::error!(error = %error, "transaction creation failed");
                self.state.error = Some(SUBMIT_FAILED.to_owned());
            }
        }
    }

    /// Presence validation. Yields the parsed amount and the location only
    /// when every field is usable: the amount parses as a number, both
    /// identifiers are non-empty, and both coordinates are present.
    fn validated_input(&self) -> Option<(f64, Coordinates)> {
        let amount: f64 = self.state.amount.trim().parse().ok()?;
        if self.state.user_id.is_empty() || self.state.device_id.is_empty() {
            return None;
        }
        let location = self.state.location.filter(Coordinates::is_present)?;
        Some((amount, location))
    }
}
