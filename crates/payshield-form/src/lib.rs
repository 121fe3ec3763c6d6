//! Transaction form controller.
//!
//! Owns the field state of the submission form and drives the screening
//! flow: presence validation, fraud scoring, then handing the approved
//! request to the injected transaction creation collaborator. Every failure
//! lands in the single user-facing error slot of [`FormState`].

pub mod controller;
pub mod types;

pub use controller::TransactionForm;
pub use types::{CreationError, CreationRequest, FormState};
