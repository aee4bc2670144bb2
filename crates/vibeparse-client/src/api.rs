//! Backend HTTP client
//!
//! Three endpoints, one request each, no retries:
//! - `GET  /api/config`
//! - `POST /api/generate-script`
//! - `GET  /api/scripts/{script_id}`

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use vibeparse_core::prelude::*;
use vibeparse_core::{ErrorDetail, GenerateRequest, GenerateResponse, Script, ServerConfig};

use crate::outcome::FetchOutcome;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Characters escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the generation backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for `base_url`
    ///
    /// Trailing slashes on the base are normalised so endpoint paths always
    /// append rather than replace the last segment.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| Error::invalid_url(format!("{base_url}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path (leading slashes ignored)
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::invalid_url(format!("{path}: {e}")))
    }

    /// `GET /api/config`
    pub async fn fetch_config(&self) -> FetchOutcome<ServerConfig> {
        let url = match self.endpoint("/api/config") {
            Ok(url) => url,
            Err(e) => return FetchOutcome::NetworkError(e.to_string()),
        };
        debug!("GET {}", url);
        let response = self.http.get(url).send().await;
        decode_json(response).await
    }

    /// `POST /api/generate-script`
    pub async fn generate_script(&self, request: &GenerateRequest) -> FetchOutcome<GenerateResponse> {
        let url = match self.endpoint("/api/generate-script") {
            Ok(url) => url,
            Err(e) => return FetchOutcome::NetworkError(e.to_string()),
        };
        info!(
            "POST {} (proficiency={}, depth={})",
            url,
            request.proficiency,
            request.depth.token()
        );
        let response = self.http.post(url).json(request).send().await;
        decode_json(response).await
    }

    /// `GET /api/scripts/{script_id}`
    ///
    /// The payload is validated here; highlights with non-string code are
    /// logged and kept as typed violations.
    pub async fn fetch_script(&self, script_id: &str) -> FetchOutcome<Script> {
        let url = match self.endpoint(&script_path(script_id)) {
            Ok(url) => url,
            Err(e) => return FetchOutcome::NetworkError(e.to_string()),
        };
        debug!("GET {}", url);
        let response = self.http.get(url).send().await;
        let outcome = decode_with(response, |body| {
            Script::from_json(body).map_err(|e| e.to_string())
        })
        .await;

        if let FetchOutcome::Success(script) = &outcome {
            for violation in script.violations() {
                warn!("Script {} contract violation: {}", script_id, violation);
            }
            info!("Loaded script {} ({} scenes)", script_id, script.len());
        }
        outcome
    }
}

/// Relative path of a script, with the id escaped as one segment
pub fn script_path(script_id: &str) -> String {
    format!("api/scripts/{}", utf8_percent_encode(script_id, PATH_SEGMENT))
}

async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Result<Response>,
) -> FetchOutcome<T> {
    decode_with(response, |body| {
        serde_json::from_str(body).map_err(|e| e.to_string())
    })
    .await
}

async fn decode_with<T>(
    response: reqwest::Result<Response>,
    parse: impl FnOnce(&str) -> std::result::Result<T, String>,
) -> FetchOutcome<T> {
    let response = match response {
        Ok(response) => response,
        Err(e) => {
            warn!("Request failed: {}", e);
            return FetchOutcome::NetworkError(e.to_string());
        }
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read response body: {}", e);
            return FetchOutcome::NetworkError(e.to_string());
        }
    };

    if !status.is_success() {
        let detail = error_detail(status, &body);
        warn!("Backend returned {}: {:?}", status, detail);
        return FetchOutcome::HttpError {
            status: status.as_u16(),
            detail,
        };
    }

    match parse(&body) {
        Ok(value) => FetchOutcome::Success(value),
        Err(e) => {
            warn!("Invalid payload from backend: {}", e);
            FetchOutcome::InvalidPayload(e)
        }
    }
}

fn error_detail(status: StatusCode, body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(err) => Some(err.detail),
        Err(_) => {
            trace!("Non-JSON error body for {}: {}", status, body);
            None
        }
    }
}
