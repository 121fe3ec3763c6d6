//! Client for the fraud scoring service.
//!
//! Submits candidate transactions to the model's `/predict` endpoint and
//! returns its typed verdict. The client reports what the service said;
//! deciding what to do with a verdict belongs to the caller.

pub mod client;
pub mod error;
pub mod types;

pub use client::ScoringClient;
pub use error::ScoringError;
pub use types::{ScoreVerdict, TransactionCandidate};
