//! Porkbun provider
//!
//! Credentials travel inside every JSON request body (`apikey` /
//! `secretapikey`), not in headers; all endpoints are POST.

mod http;
mod provider;
mod translate;
mod types;

use std::time::Duration;

use reqwest::Client;

pub(crate) use types::{
    ApiStatus, Credentials, PingResponse, RecordPayload, RecordsResponse, StatusResponse,
    WireRecord,
};

/// Porkbun v3 API base URL.
pub(crate) const DEFAULT_API_BASE: &str = "https://api.porkbun.com/api/json/v3";

/// Lowest TTL Porkbun accepts. Anything below is silently raised before the
/// request is sent, mirroring what the API would do anyway.
pub(crate) const MIN_TTL: Duration = Duration::from_secs(600);

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Porkbun DNS record provider.
///
/// Holds the credential pair read-only for the lifetime of the provider; no
/// other state is shared between operations, so one instance can be used from
/// independent call sites concurrently (without any atomicity guarantee
/// across calls — see [`DnsProvider`](crate::DnsProvider)).
pub struct PorkbunProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) secret_api_key: String,
}

/// Porkbun provider builder.
pub struct PorkbunProviderBuilder {
    api_key: String,
    secret_api_key: String,
    base_url: String,
}

impl PorkbunProviderBuilder {
    fn new(api_key: String, secret_api_key: String) -> Self {
        Self {
            api_key,
            secret_api_key,
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Override the API base URL. Intended for tests against a local mock
    /// server; a trailing slash is stripped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        self.base_url = base.trim_end_matches('/').to_string();
        self
    }

    pub fn build(self) -> PorkbunProvider {
        PorkbunProvider {
            client: create_http_client(),
            base_url: self.base_url,
            api_key: self.api_key,
            secret_api_key: self.secret_api_key,
        }
    }
}

impl PorkbunProvider {
    /// Create a provider talking to the public Porkbun API.
    pub fn new(api_key: String, secret_api_key: String) -> Self {
        Self::builder(api_key, secret_api_key).build()
    }

    pub fn builder(api_key: String, secret_api_key: String) -> PorkbunProviderBuilder {
        PorkbunProviderBuilder::new(api_key, secret_api_key)
    }

    pub(crate) fn credentials(&self) -> Credentials {
        Credentials {
            apikey: self.api_key.clone(),
            secretapikey: self.secret_api_key.clone(),
        }
    }
}
