//! REST Client
//!
//! Thin wrappers over the backend, organized by domain. Every call goes
//! through `ApiClient`, which adds the bearer token and maps failures
//! onto `ApiError`.

mod auth;
mod bookings;
mod certificates;
mod courses;
mod dashboard;
mod mentor;
mod programs;
mod quizzes;
mod users;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::warn;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::forms::FormPayload;
use crate::models::User;
use crate::session::ProfileSource;

// Re-export all public items
pub use auth::*;
pub use bookings::*;
pub use certificates::*;
pub use courses::*;
pub use dashboard::*;
pub use mentor::*;
pub use programs::*;
pub use quizzes::*;
pub use users::*;

/// Value safe to splice into a query string
pub fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, token: Option<String>) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    // ========================
    // Request Builders
    // ========================

    fn get_request(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.url(path)))
    }

    fn post_request(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.url(path)))
    }

    fn put_request(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::put(&self.url(path)))
    }

    fn delete_request(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::delete(&self.url(path)))
    }

    // ========================
    // JSON Verbs
    // ========================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.get_request(path).build().map_err(network)?;
        decode(send(request).await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.post_request(path).json(body).map_err(network)?;
        decode(send(request).await?).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.put_request(path).json(body).map_err(network)?;
        decode(send(request).await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.delete_request(path).build().map_err(network)?;
        decode(send(request).await?).await
    }

    // ========================
    // Forms & Downloads
    // ========================

    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, payload: &FormPayload) -> Result<T, ApiError> {
        self.send_form(self.post_request(path), payload).await
    }

    pub async fn put_form<T: DeserializeOwned>(&self, path: &str, payload: &FormPayload) -> Result<T, ApiError> {
        self.send_form(self.put_request(path), payload).await
    }

    async fn send_form<T: DeserializeOwned>(&self, builder: RequestBuilder, payload: &FormPayload) -> Result<T, ApiError> {
        let request = match payload {
            FormPayload::Json(body) => builder.json(body).map_err(network)?,
            FormPayload::Multipart { .. } => {
                let form = payload
                    .to_form_data()
                    .map_err(|err| ApiError::Network(format!("{:?}", err)))?
                    .ok_or_else(|| ApiError::Network("empty form".to_string()))?;
                // The browser sets the multipart boundary header itself
                builder.body(form).map_err(network)?
            }
        };
        decode(send(request).await?).await
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.get_request(path).build().map_err(network)?;
        bytes(send(request).await?).await
    }

    pub async fn post_bytes<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
        let request = self.post_request(path).json(body).map_err(network)?;
        bytes(send(request).await?).await
    }
}

impl ProfileSource for ApiClient {
    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        let client = Self {
            base_url: self.base_url.clone(),
            token: Some(token.to_string()),
        };
        client.get("/api/auth/profile").await
    }
}

// ========================
// Response Handling
// ========================

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let url = request.url();
    let response = request.send().await.map_err(|err| {
        warn!("[API] {} unreachable: {}", url, err);
        network(err)
    })?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    warn!("[API] {} failed: {}", url, err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    parse_body(&body)
}

/// Parse a success body. Blank bodies read as `null`, then as `{}`, so
/// unit-like acknowledgements decode either way.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return serde_json::from_str("null")
            .or_else(|_| serde_json::from_str("{}"))
            .map_err(|err| ApiError::Decode(err.to_string()));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn bytes(response: Response) -> Result<Vec<u8>, ApiError> {
    response
        .binary()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessageResponse, NextProgram};

    #[test]
    fn test_blank_bodies_decode() {
        let ack: MessageResponse = parse_body("").unwrap();
        assert_eq!(ack.message, None);
        let next: Option<NextProgram> = parse_body("  ").unwrap();
        assert_eq!(next, None);
        let value: serde_json::Value = parse_body("").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let result: Result<Vec<u32>, _> = parse_body("<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_query_encoding() {
        assert_eq!(encode_query("a b&c"), "a%20b%26c");
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new(&AppConfig::from_values(Some("https://api.shecan.rw/"), None), None);
        assert_eq!(client.url("/api/courses/public"), "https://api.shecan.rw/api/courses/public");
    }
}
