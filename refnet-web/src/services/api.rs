//! HTTP client wrapper around the backend REST API.
//!
//! One configured client: fixed base URL, JSON bodies, optional bearer token.
//! No retries and no refresh interceptors. Responses are validated at this
//! boundary: a malformed body surfaces as [`ApiError::Decode`] instead of
//! propagating half-parsed data into the views, and every failure is
//! classified so pages can report it through the toast channel.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::dto::ApiEnvelope;

use crate::utils::constants::API_BASE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session expired or not authorized")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected server response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Request client with an optional bearer token.
#[derive(Clone, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Client for the public endpoints (login, referrer lookup).
    pub fn new() -> Self {
        Self { token: None }
    }

    /// Client carrying `Authorization: Bearer <token>`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub async fn get<T: DeserializeOwned + Default>(&self, path: &str) -> ApiResult<T> {
        let request = self.authorize(Request::get(&self.url(path)));
        let response = request.send().await.map_err(network)?;
        self.unwrap_envelope(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(network)?;
        let response = request.send().await.map_err(network)?;
        self.unwrap_envelope(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(network)?;
        let response = request.send().await.map_err(network)?;
        self.unwrap_envelope(response).await
    }

    /// POST for the one endpoint (login) whose response is not wrapped in the
    /// `{response, message, data}` envelope.
    pub async fn post_raw<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(network)?;
        let response = request.send().await.map_err(network)?;
        let response = self.check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", API_BASE, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn check_status(&self, response: Response) -> ApiResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        // The backend puts its reason in the envelope even on error statuses.
        let message = match response.json::<ApiEnvelope<serde_json::Value>>().await {
            Ok(envelope) => envelope
                .message
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
            Err(_) => format!("Request failed with status {}", status),
        };
        Err(ApiError::Http { status, message })
    }

    async fn unwrap_envelope<T: DeserializeOwned + Default>(&self, response: Response) -> ApiResult<T> {
        let response = self.check_status(response).await?;
        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !envelope.response {
            return Err(ApiError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "Request rejected by server".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("missing data field".to_string()))
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}
