//! reqwest-backed transport for the remote REST store.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::collaborators::{LoadingGuard, LoadingIndicator};
use crate::domain::transport::{Method, Transport};
use crate::error::AppError;

const APIKEY: HeaderName = HeaderName::from_static("apikey");
const PREFER: HeaderName = HeaderName::from_static("prefer");
const JSON: &str = "application/json";

/// HTTP transport with credential headers and a per-request deadline.
///
/// Each call arms its own deadline. When it elapses the in-flight request
/// future is dropped, which aborts the connection, and the call fails with
/// [`AppError::Timeout`]. The loading indicator is notified on entry and
/// exactly once on exit.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: HeaderValue,
    bearer: HeaderValue,
    timeout: Duration,
    indicator: Arc<dyn LoadingIndicator>,
}

impl HttpTransport {
    /// Builds a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential cannot be used as a header value or the
    /// underlying client cannot be built.
    pub fn new(config: &Config, indicator: Arc<dyn LoadingIndicator>) -> anyhow::Result<Self> {
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| anyhow::anyhow!("API_KEY is not a valid header value: {e}"))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.auth_token))
            .map_err(|e| anyhow::anyhow!("API_AUTH_TOKEN is not a valid header value: {e}"))?;
        bearer.set_sensitive(true);

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            bearer,
            timeout: config.timeout(),
            indicator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fresh header set for one request.
    fn headers(&self, method: Method) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(APIKEY, self.api_key.clone());
        headers.insert(AUTHORIZATION, self.bearer.clone());
        if method.is_write() {
            headers.insert(PREFER, HeaderValue::from_static("return=representation"));
        }
        headers
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let mut request = self
            .client
            .request(to_reqwest(method), url)
            .headers(self.headers(method));

        if let Some(body) = body {
            debug!(%method, %url, body = %body, "Request body");
            request = request.json(&body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(AppError::http_status(
                status.as_u16(),
                String::from_utf8_lossy(&bytes),
            ));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        let data: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::decode(format!("invalid JSON body: {e}")))?;
        debug!(%method, %url, body = %data, "Response body");
        Ok(data)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let _loading = LoadingGuard::start(self.indicator.as_ref());
        let started = Instant::now();

        let result = match tokio::time::timeout(self.timeout, self.send(method, &url, body)).await
        {
            Ok(result) => result,
            Err(_) => Err(AppError::timeout(self.timeout.as_millis() as u64)),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(%method, %url, elapsed_ms, "API request completed"),
            Err(e) => {
                warn!(%method, %url, elapsed_ms, kind = %e.kind(), "API request failed: {}", e);
            }
        }

        result
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn map_reqwest_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::timeout(0)
    } else if e.is_decode() {
        AppError::decode(e.to_string())
    } else {
        AppError::network(e.to_string())
    }
}
