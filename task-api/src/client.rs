//! HTTP client for the tasks endpoint.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{CreateTaskPayload, Task};

/// Path of the tasks collection, relative to the API base URL.
pub const TASKS_PATH: &str = "/api/v1/tasks";

/// Client for the tasks REST API.
///
/// Cheap to clone; clones share the underlying connection pool on native targets.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl TaskClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// Trailing slashes are stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            http: http_client(&base_url),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the tasks collection.
    pub fn tasks_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }

    /// Create a task. Returns the task as stored by the server.
    pub async fn create_task(&self, payload: &CreateTaskPayload) -> Result<Task, ApiError> {
        let url = self.tasks_url();
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        log::debug!("POST {url}");
        let result: Result<Task, ApiError> = self
            .post_json(&url, body)
            .await
            .and_then(|(status, bytes)| decode(status, &bytes));

        if let Err(e) = &result {
            log::warn!("Creating task failed: {e}");
        }
        result
    }

    /// List every task.
    pub async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.tasks_url();

        log::debug!("GET {url}");
        let result: Result<Vec<Task>, ApiError> = self
            .get(&url)
            .await
            .and_then(|(status, bytes)| decode(status, &bytes));

        match &result {
            Ok(tasks) => log::debug!("Loaded {} tasks", tasks.len()),
            Err(e) => log::warn!("Loading tasks failed: {e}"),
        }
        result
    }
}

/// Interpret a response: non-2xx becomes [`ApiError::Status`], otherwise the
/// body is decoded as JSON.
fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

// ============================================================================
// Native transport
// ============================================================================

/// Loopback APIs are reached directly, bypassing any system proxy.
#[cfg(not(target_arch = "wasm32"))]
fn http_client(base_url: &str) -> reqwest::Client {
    let loopback = reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(|host| matches!(host, "localhost" | "127.0.0.1" | "[::1]")))
        .unwrap_or(false);

    let builder = reqwest::Client::builder();
    let builder = if loopback { builder.no_proxy() } else { builder };
    builder.build().unwrap_or_else(|e| {
        log::warn!("Falling back to default HTTP client: {e}");
        reqwest::Client::new()
    })
}

#[cfg(not(target_arch = "wasm32"))]
impl TaskClient {
    async fn post_json(&self, url: &str, body: String) -> Result<(u16, Vec<u8>), ApiError> {
        let request = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        Self::send(request).await
    }

    async fn get(&self, url: &str) -> Result<(u16, Vec<u8>), ApiError> {
        Self::send(self.http.get(url)).await
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<(u16, Vec<u8>), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok((status, bytes.to_vec()))
    }
}

// ============================================================================
// Browser transport
// ============================================================================

#[cfg(target_arch = "wasm32")]
impl TaskClient {
    async fn post_json(&self, url: &str, body: String) -> Result<(u16, Vec<u8>), ApiError> {
        use gloo_net::http::Request;

        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Self::send(request).await
    }

    async fn get(&self, url: &str) -> Result<(u16, Vec<u8>), ApiError> {
        use gloo_net::http::Request;

        let request = Request::get(url)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::send(request).await
    }

    async fn send(request: gloo_net::http::Request) -> Result<(u16, Vec<u8>), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok((status, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_url_strips_trailing_slashes() {
        let client = TaskClient::new("https://localhost:7204//");
        assert_eq!(client.base_url(), "https://localhost:7204");
        assert_eq!(client.tasks_url(), "https://localhost:7204/api/v1/tasks");
    }

    #[test]
    fn decode_rejects_non_success_status() {
        let err = decode::<Vec<Task>>(500, b"").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn decode_reports_malformed_success_body() {
        let err = decode::<Vec<Task>>(200, b"{not json").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn decode_parses_task_list() {
        let tasks: Vec<Task> = decode(200, b"[]").unwrap();
        assert!(tasks.is_empty());
    }
}
