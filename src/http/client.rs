//! Thin JSON-over-HTTP client used by the package index.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::status::check_status;

/// HTTP client for the index's JSON endpoints.
///
/// Requests are sent once; failures are returned to the caller as-is.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status().map_err(check_status)?;

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }

    /// GET without a query that maps HTTP 404 to `Ok(None)`.
    #[tracing::instrument(skip(self))]
    pub async fn get_json_optional<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        debug!("GET JSON from {} (404 allowed)...", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} returned 404", url);
            return Ok(None);
        }

        let response = response.error_for_status().map_err(check_status)?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(Some(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusError;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct TestResponse {
        name: String,
        value: i32,
    }

    #[tokio::test]
    async fn test_get_json_without_query() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: TestResponse = client
            .get_json_with_query(&format!("{}/test", url), &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_json_not_found_is_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value> =
            client.get_json_with_query(&format!("{}/test", url), &[]).await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatusError>(),
            Some(StatusError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_json_with_query_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/search?q=flask")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["item1", "item2"]"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Vec<String> = client
            .get_json_with_query(&format!("{}/search", url), &[("q", "flask")])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, vec!["item1", "item2"]);
    }

    #[tokio::test]
    async fn test_get_json_optional_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Option<TestResponse> = client
            .get_json_optional(&format!("{}/missing", url))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_json_optional_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "x", "value": 1}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Option<TestResponse> = client
            .get_json_optional(&format!("{}/test", url))
            .await
            .unwrap();

        assert_eq!(
            result,
            Some(TestResponse {
                name: "x".to_string(),
                value: 1
            })
        );
    }

    #[tokio::test]
    async fn test_get_json_optional_server_error_propagates() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/test")
            .with_status(500)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<Option<TestResponse>> =
            client.get_json_optional(&format!("{}/test", url)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<TestResponse> =
            client.get_json_with_query(&format!("{}/test", url), &[]).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON response"));
    }
}
