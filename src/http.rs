//! HTTP client wrapper for FileVault API requests.

use crate::error::Result;
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// Transport-level request timeout. No layer above this one enforces a
/// timeout of its own.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for making requests to a FileVault server.
///
/// Owns the API base URL and the bearer token. Once a token is set,
/// every request carries an `Authorization: Bearer <token>` header.
/// Requests are sent exactly once; there is no retry logic.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client for the given server URL.
    ///
    /// The `/api` base path is appended here; callers pass endpoint
    /// paths like `/files/list`.
    pub fn new(server_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: format!("{}/api", server_url.trim_end_matches('/')),
            token: None,
        }
    }

    /// Set or clear the bearer token used for authenticated requests.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Make a GET request.
    pub async fn get(&self, path: &str) -> Result<Response> {
        let response = self.authorize(self.client.get(self.url(path))).send().await?;
        Ok(response)
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let response = self
            .authorize(self.client.get(self.url(path)))
            .query(query)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request with a JSON body.
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let response = self
            .authorize(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request with a multipart form body.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Response> {
        let response = self
            .authorize(self.client.post(self.url(path)))
            .multipart(form)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a PUT request with a JSON body.
    pub async fn put_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let response = self
            .authorize(self.client.put(self.url(path)))
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let response = self
            .authorize(self.client.delete(self.url(path)))
            .send()
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new("http://localhost:5000");
        assert_eq!(client.url("/files/list"), "http://localhost:5000/api/files/list");

        // Trailing slash on the server URL must not double up.
        let client = HttpClient::new("http://localhost:5000/");
        assert_eq!(client.url("/files/list"), "http://localhost:5000/api/files/list");
    }

    #[test]
    fn test_token_management() {
        let mut client = HttpClient::new("http://localhost:5000");
        assert!(client.token().is_none());

        client.set_token(Some("secret".to_string()));
        assert_eq!(client.token(), Some("secret"));

        client.set_token(None);
        assert!(client.token().is_none());
    }
}
