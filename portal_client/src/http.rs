//! The single outbound HTTP path of the application.

use std::time::Duration;

use portal_api_types::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{ApiError, Result};
use crate::session::Session;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub enum RequestBody {
    Json(serde_json::Value),
    /// Raw payload, sent without forcing a content type.
    Binary(Vec<u8>),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    fn forces_json(&self) -> bool {
        matches!(self, RequestBody::Json(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Marks calls the backend rejects without a token. A missing token is
    /// logged, the request is still sent.
    pub require_auth: bool,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn authenticated() -> Self {
        RequestOptions {
            require_auth: true,
            ..Default::default()
        }
    }

    pub fn with_query<I, K>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, String)>,
        K: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(key, value)| (key.into(), value)));
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Decoded envelope together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub envelope: Envelope<T>,
}

impl<T> ApiResponse<T> {
    fn rejection(&self) -> Option<ApiError> {
        (!self.envelope.success).then(|| ApiError::Rejected {
            status: self.status,
            message: self.envelope.message.clone(),
        })
    }

    /// Payload of a successful envelope.
    pub fn into_data(self, path: &str) -> Result<T> {
        if let Some(rejection) = self.rejection() {
            return Err(rejection);
        }
        self.envelope.data.ok_or_else(|| ApiError::MissingData {
            path: path.to_owned(),
        })
    }

    /// Like [`ApiResponse::into_data`], but a successful envelope without
    /// `data` yields the default (an empty list).
    pub fn into_data_or_default(self) -> Result<T>
    where
        T: Default,
    {
        if let Some(rejection) = self.rejection() {
            return Err(rejection);
        }
        Ok(self.envelope.data.unwrap_or_default())
    }

    /// Checks the `success` flag and returns the backend's message.
    pub fn into_message(self) -> Result<Option<String>> {
        if let Some(rejection) = self.rejection() {
            return Err(rejection);
        }
        Ok(self.envelope.message)
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    session: Session,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        Self::with_timeout(base_url, session, DEFAULT_TIMEOUT)
    }

    /// The timeout applies on native targets; in the browser the fetch
    /// implementation governs.
    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Session,
        timeout: Duration,
    ) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let http = builder
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(HttpClient {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::GET, path, None, options).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::POST, path, body, options).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::PUT, path, body, options).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::PATCH, path, body, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        self.request(Method::DELETE, path, None, options).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        let url = self.url(path);
        let mut headers = strip_cors_headers(options.headers);

        match self.session.token() {
            Some(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| ApiError::Request(e.to_string()))?;
                headers.insert(AUTHORIZATION, value);
            }
            None if options.require_auth => {
                warn!(%method, path, "Sending authenticated request without a stored token");
            }
            None => {}
        }

        if is_mutating(&method) && body.as_ref().map_or(true, RequestBody::forces_json) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        } else if matches!(body, Some(RequestBody::Multipart(_))) {
            headers.remove(CONTENT_TYPE);
        }

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        request = match body {
            Some(RequestBody::Json(value)) => request.body(value.to_string()),
            Some(RequestBody::Binary(bytes)) => request.body(bytes),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        debug!(%method, %url, "Sending request");
        let response = request.send().await.map_err(|e| {
            let err = ApiError::network(&url, e);
            error!(%method, %url, error = %err, "No response received");
            err
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%method, %url, "Backend rejected credentials, clearing local session");
            self.session.clear();
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(&url, e))?;
        let status = status.as_u16();

        if status >= 500 {
            let message = serde_json::from_slice::<Envelope<IgnoredAny>>(&bytes)
                .ok()
                .and_then(|envelope| envelope.message);
            error!(%method, %url, status, "Server error");
            return Err(ApiError::Server { status, message });
        }

        let envelope = serde_json::from_slice(&bytes)
            .map_err(|source| ApiError::Decode { status, source })?;
        debug!(%method, %url, status, "Received response");

        Ok(ApiResponse { status, envelope })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn is_mutating(method: &Method) -> bool {
    ![Method::GET, Method::HEAD, Method::OPTIONS].contains(method)
}

/// CORS headers are set by servers, never by callers.
fn strip_cors_headers(mut headers: HeaderMap) -> HeaderMap {
    let cors = headers
        .keys()
        .filter(|name| name.as_str().starts_with("access-control-"))
        .cloned()
        .collect::<Vec<_>>();

    for name in cors {
        debug!(header = %name, "Dropping caller-supplied CORS header");
        headers.remove(&name);
    }

    headers
}
