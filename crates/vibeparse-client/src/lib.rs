//! vibeparse-client - Backend plumbing for VibeParse
//!
//! Thin HTTP layer over the generation service. Each call issues exactly one
//! request and resolves to a [`FetchOutcome`]: success, HTTP error with the
//! server's detail, network failure, or a payload that breaks the contract.

pub mod api;
pub mod outcome;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{script_path, ApiClient, DEFAULT_BASE_URL};
pub use outcome::{FetchOutcome, NETWORK_FAILURE_MESSAGE};
