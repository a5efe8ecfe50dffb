use std::time::Duration;

use log::{debug, info, warn};
use onboard_model::error::CreateUserErrorBody;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::infrastructure::api_error::ApiError;

/// JSON client for the user directory backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Build an absolute URL for a route path
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            decode_success(&bytes)
        } else {
            warn!("[ApiClient] Request failed with status {}", status);
            Err(rejection(status, &bytes))
        }
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("GET request to: {}", url);

        let request = self.build_request(self.client.get(&url));
        self.execute_request(request).await
    }

    /// POST request with a JSON body
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("POST request to: {}", url);

        let request = self.build_request(self.client.post(&url).json(body));
        self.execute_request(request).await
    }
}

/// An empty success body decodes as JSON `null`.
fn decode_success<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    Ok(serde_json::from_slice(bytes)?)
}

/// Map a non-success response to an error, keeping a structured body when the
/// backend sent one.
fn rejection(status: StatusCode, bytes: &[u8]) -> ApiError {
    match serde_json::from_slice::<CreateUserErrorBody>(bytes) {
        Ok(body) => ApiError::Rejected {
            status: status.as_u16(),
            body,
        },
        Err(_) => ApiError::Status {
            status: status.as_u16(),
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}
