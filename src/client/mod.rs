//! Typed, authenticated client for the Brezza backend API.
//!
//! Every resource call funnels through one request primitive that attaches
//! the bearer token, sends the call, and translates the backend's
//! `{code, message, data}` envelope into a typed value or an [`ApiError`].
//! No retries, no client-side timeouts beyond reqwest's defaults, no
//! partial results.

mod auth;
mod links;
mod media;
mod posts;
mod site;
mod taxonomy;

pub use media::MediaListQuery;
pub use posts::PostListQuery;
pub use site::clear_site_config_cache;
pub use taxonomy::clear_taxonomy_cache;

use bytes::Bytes;
use reqwest::{Client, Method, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use brezza_api_types::ApiEnvelope;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Whether a call attaches the bearer token.
///
/// With `Bearer` and no token installed, the request still goes out
/// unauthenticated; rejecting it is the backend's job, not this layer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    None,
    Bearer,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?.join("/")?;
        let http = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            http,
            base,
            token: None,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.as_str())
    }

    pub fn user_agent() -> &'static str {
        concat!("brezza/", env!("CARGO_PKG_VERSION"))
    }

    /// Installs the bearer token attached to subsequent authenticated calls.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    /// Core request primitive for enveloped JSON endpoints.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let (status, bytes) = self.send(method, path, query, body, auth).await?;
        let envelope: ApiEnvelope<T> = decode(status, &bytes)?;
        if !envelope.is_success() {
            return Err(ApiError::Envelope(envelope_message(envelope.message)));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Envelope("missing data in response".to_string()))
    }

    /// Variant for void operations whose envelope carries `data: null`.
    pub(crate) async fn request_unit(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<(), ApiError> {
        let (status, bytes) = self.send(method, path, query, body, auth).await?;
        let envelope: ApiEnvelope<serde_json::Value> = decode(status, &bytes)?;
        if !envelope.is_success() {
            return Err(ApiError::Envelope(envelope_message(envelope.message)));
        }
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<(StatusCode, Bytes), ApiError> {
        let mut url = self.url(path)?;
        if let Some(pairs) = query {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in pairs {
                qp.append_pair(k, v);
            }
        }

        debug!(method = %method, path, authenticated = auth == Auth::Bearer, "backend call");

        let mut req = self.http.request(method, url);
        if auth == Auth::Bearer {
            if let Some(token) = &self.token {
                req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
        }
        if let Some(b) = body {
            req = req.json(&b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!(status = status.as_u16(), path, "backend response");
        Ok((status, bytes))
    }

    /// Multipart request path for uploads, which bypass the JSON body route
    /// but share the envelope handling.
    pub(crate) async fn send_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(StatusCode, Bytes), ApiError> {
        let mut req = self.http.post(self.url(path)?).multipart(form);
        if let Some(token) = &self.token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        Ok((status, bytes))
    }
}

/// Turns a raw response into an envelope, applying the shared failure rules:
/// non-2xx first, then the empty-body check, then JSON decoding.
pub(crate) fn decode<T: DeserializeOwned>(
    status: StatusCode,
    bytes: &Bytes,
) -> Result<ApiEnvelope<T>, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: http_failure_message(bytes, status),
        });
    }
    if bytes.is_empty() {
        return Err(ApiError::EmptyResponse);
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub(crate) fn envelope_message(message: String) -> String {
    if message.is_empty() {
        "API request failed".to_string()
    } else {
        message
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn http_failure_message(bytes: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

pub(crate) fn query<'a>(pairs: &'a [(&'a str, String)]) -> Option<&'a [(&'a str, String)]> {
    (!pairs.is_empty()).then_some(pairs)
}
