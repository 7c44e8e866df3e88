//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::ApiResponse;

/// HTTP client for making requests to the order-management API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::server_message(&body);
            return match status {
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Extract the envelope message from an error body, verbatim
    ///
    /// Falls back to the raw body, then to a generic message, so the user
    /// always sees something actionable.
    fn server_message(body: &str) -> String {
        if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            && !envelope.message.is_empty()
        {
            return envelope.message;
        }
        if body.trim().is_empty() {
            "An error occurred".to_string()
        } else {
            body.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_envelope() {
        let body = r#"{"status":"error","message":"Table number is required for dine-in orders"}"#;
        assert_eq!(
            HttpClient::server_message(body),
            "Table number is required for dine-in orders"
        );
    }

    #[test]
    fn server_message_falls_back_to_raw_body() {
        assert_eq!(HttpClient::server_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(HttpClient::server_message("  "), "An error occurred");
    }

    #[test]
    fn base_url_is_normalized() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/"));
        assert_eq!(client.url("/api/menu"), "http://localhost:5000/api/menu");
    }
}
