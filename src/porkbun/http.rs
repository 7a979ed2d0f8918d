//! Porkbun HTTP request layer.
//!
//! Every API call is a JSON POST with the credentials flattened into the
//! body. This module owns the POST helper and the API-status interpretation;
//! endpoint paths and payloads live with the operations in `provider`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::redact_credentials;

use super::{ApiStatus, PorkbunProvider};

impl PorkbunProvider {
    /// Sends one JSON POST to `{base_url}{endpoint}` and parses the response.
    ///
    /// Non-2xx responses become [`ProviderError::HttpStatus`] with the body
    /// preserved for diagnostics; the API-level `status` field is NOT
    /// inspected here — callers pair this with [`ensure_success`].
    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{endpoint}", self.base_url);

        let body_json = serde_json::to_string(body).map_err(|e| ProviderError::Serialization {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {}", redact_credentials(&body_json));

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body_json);

        let (status_code, response_text) =
            HttpUtils::execute_request(request, "POST", endpoint).await?;

        if !(200..300).contains(&status_code) {
            return Err(ProviderError::HttpStatus {
                status: status_code,
                body: response_text,
            });
        }

        HttpUtils::parse_json(&response_text)
    }
}

/// Interprets the API-level status every response envelope carries.
///
/// # Errors
/// * [`ProviderError::Api`] — the service answered `"ERROR"`; its message
///   (when present) is passed through verbatim
pub(crate) fn ensure_success(status: ApiStatus, message: Option<String>) -> Result<()> {
    match status {
        ApiStatus::Success => Ok(()),
        ApiStatus::Error => Err(ProviderError::Api { message }),
    }
}
