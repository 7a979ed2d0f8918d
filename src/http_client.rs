//! Generic HTTP round-trip plumbing.
//!
//! One request in, one `(status, body)` out. Transport-level concerns only:
//! sending, logging, reading the body, mapping connection failures. Business
//! status interpretation (the `status` field of every Porkbun response) is
//! deliberately left to the caller so this layer stays protocol-generic.
//!
//! There is no retry and no backoff here: every record operation is one
//! independent HTTP round trip.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set.
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs one HTTP request and returns the status code and body text.
    ///
    /// The response body is always fully read (and the connection released)
    /// regardless of status, so diagnostics survive even for error pages.
    ///
    /// # Errors
    /// * [`ProviderError::Timeout`] — the request timed out
    /// * [`ProviderError::Network`] — any other connection-level failure
    pub(crate) async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("{method_name} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ProviderError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parses a JSON response body into `T`.
    ///
    /// # Errors
    /// * [`ProviderError::Parse`] — the body is not valid JSON or does not
    ///   match the expected shape
    pub(crate) fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ProviderError::Parse {
                detail: e.to_string(),
            }
        })
    }
}
