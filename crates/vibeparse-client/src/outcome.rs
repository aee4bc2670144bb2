//! Fetch outcome sum type
//!
//! Every backend call resolves to exactly one [`FetchOutcome`]; callers match
//! on it instead of inspecting loosely-typed JSON.

use vibeparse_core::Error;

/// Message shown when the backend cannot be reached
pub const NETWORK_FAILURE_MESSAGE: &str = "Could not reach the server";

/// Result of one backend request
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// 2xx with a payload matching the contract
    Success(T),
    /// Non-2xx status; `detail` is the server's `{ "detail": ... }` if present
    HttpError { status: u16, detail: Option<String> },
    /// Transport failure (connection refused, DNS, reset, timeout)
    NetworkError(String),
    /// 2xx whose body does not match the contract
    InvalidPayload(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Success(value) => FetchOutcome::Success(f(value)),
            FetchOutcome::HttpError { status, detail } => FetchOutcome::HttpError { status, detail },
            FetchOutcome::NetworkError(msg) => FetchOutcome::NetworkError(msg),
            FetchOutcome::InvalidPayload(msg) => FetchOutcome::InvalidPayload(msg),
        }
    }

    /// The single user-visible message for a failed outcome
    ///
    /// Server-provided `detail` is surfaced verbatim; everything else falls
    /// back to `fallback` (or the network message). Returns `None` on success.
    pub fn failure_message(&self, fallback: &str) -> Option<String> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::HttpError {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => Some(detail.clone()),
            FetchOutcome::HttpError { .. } | FetchOutcome::InvalidPayload(_) => {
                Some(fallback.to_string())
            }
            FetchOutcome::NetworkError(_) => Some(NETWORK_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Convert into a `Result` with the core error type
    pub fn into_result(self) -> vibeparse_core::Result<T> {
        match self {
            FetchOutcome::Success(value) => Ok(value),
            FetchOutcome::HttpError { status, detail } => Err(Error::http(
                status,
                detail.unwrap_or_else(|| "no detail".to_string()),
            )),
            FetchOutcome::NetworkError(msg) => Err(Error::network(msg)),
            FetchOutcome::InvalidPayload(msg) => Err(Error::contract(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_server_detail() {
        let outcome: FetchOutcome<()> = FetchOutcome::HttpError {
            status: 400,
            detail: Some("Repository not found".into()),
        };
        assert_eq!(
            outcome.failure_message("Failed to generate script").as_deref(),
            Some("Repository not found")
        );
    }

    #[test]
    fn test_failure_message_fallbacks() {
        let no_detail: FetchOutcome<()> = FetchOutcome::HttpError {
            status: 502,
            detail: None,
        };
        assert_eq!(no_detail.failure_message("fallback").as_deref(), Some("fallback"));

        let blank: FetchOutcome<()> = FetchOutcome::HttpError {
            status: 500,
            detail: Some("  ".into()),
        };
        assert_eq!(blank.failure_message("fallback").as_deref(), Some("fallback"));

        let network: FetchOutcome<()> = FetchOutcome::NetworkError("refused".into());
        assert_eq!(
            network.failure_message("fallback").as_deref(),
            Some(NETWORK_FAILURE_MESSAGE)
        );

        let invalid: FetchOutcome<()> = FetchOutcome::InvalidPayload("bad".into());
        assert_eq!(invalid.failure_message("fallback").as_deref(), Some("fallback"));
    }

    #[test]
    fn test_success_has_no_failure_message() {
        assert!(FetchOutcome::Success(1).failure_message("x").is_none());
    }

    #[test]
    fn test_map_and_into_result() {
        let ok = FetchOutcome::Success(2).map(|v| v * 10);
        assert_eq!(ok, FetchOutcome::Success(20));
        assert_eq!(ok.into_result().unwrap(), 20);

        let err: FetchOutcome<u8> = FetchOutcome::NetworkError("down".into());
        assert!(matches!(err.into_result(), Err(Error::Network { .. })));
    }
}
