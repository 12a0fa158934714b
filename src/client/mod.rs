//! FileVault API client and request/response handling.

mod auth;
mod files;
mod folders;

pub use files::filename_from_disposition;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, VaultError};
use crate::http::HttpClient;

/// Client for a FileVault server.
///
/// Each operation is a single authenticated request/response round
/// trip; correctness of the storage semantics is delegated entirely to
/// the server. The client holds two pieces of mutable state: the bearer
/// token (owned by the HTTP layer, read once from the saved config at
/// construction) and the identifier of the currently viewed folder
/// (`None` = root). The folder pointer is read by listing and upload
/// defaults and written only by the navigation layer.
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
    current_folder: Option<i64>,
}

impl Client {
    /// Create an unauthenticated client for the given server URL.
    pub fn new(server_url: &str) -> Self {
        Self {
            http: HttpClient::new(server_url),
            current_folder: None,
        }
    }

    /// Create a client from saved configuration, adopting its token.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut client = Self::new(&config.server_url);
        client.set_token(config.access_token.clone());
        client
    }

    /// Set or clear the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    /// Get the current bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Check whether a bearer token is configured.
    pub fn is_authenticated(&self) -> bool {
        self.http.token().is_some()
    }

    /// The folder whose contents are presently viewed; `None` = root.
    pub fn current_folder(&self) -> Option<i64> {
        self.current_folder
    }

    /// Commit a new current folder. Called by the navigation layer only.
    pub fn set_current_folder(&mut self, folder_id: Option<i64>) {
        self.current_folder = folder_id;
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn require_auth(&self) -> Result<()> {
        if self.http.token().is_none() {
            return Err(VaultError::NotAuthenticated);
        }
        Ok(())
    }
}

/// Read a response body and decode it under the uniform contract.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;
    decode_body(status, &text)
}

/// The single success contract applied to every JSON endpoint:
/// a body carrying an `error` field fails regardless of status, a
/// non-2xx status without one fails with the status, and a 2xx body
/// must deserialize into the expected envelope — a missing key is a
/// failure even on HTTP 200.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: reqwest::StatusCode,
    text: &str,
) -> Result<T> {
    let value: Option<Value> = serde_json::from_str(text).ok();

    if let Some(message) = value
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|v| v.as_str())
    {
        return Err(VaultError::Api(message.to_string()));
    }

    if !status.is_success() {
        return Err(VaultError::Http(status.as_u16()));
    }

    let value = value.ok_or(VaultError::InvalidResponse)?;
    serde_json::from_value(value).map_err(|_| VaultError::InvalidResponse)
}

/// Reject empty or whitespace-only names before any request is made.
pub(crate) fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(VaultError::EmptyName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FolderResponse, Listing, MessageResponse};
    use reqwest::StatusCode;

    #[test]
    fn test_client_creation() {
        let client = Client::new("http://localhost:5000");
        assert!(!client.is_authenticated());
        assert_eq!(client.current_folder(), None);
    }

    #[test]
    fn test_from_config_adopts_token() {
        let config = ClientConfig {
            server_url: "http://localhost:5000".to_string(),
            access_token: Some("tok123".to_string()),
            user: None,
        };
        let client = Client::from_config(&config);
        assert!(client.is_authenticated());
        assert_eq!(client.token(), Some("tok123"));
    }

    #[test]
    fn test_current_folder_pointer() {
        let mut client = Client::new("http://localhost:5000");
        client.set_current_folder(Some(42));
        assert_eq!(client.current_folder(), Some(42));
        client.set_current_folder(None);
        assert_eq!(client.current_folder(), None);
    }

    #[test]
    fn test_decode_body_happy_path() {
        let listing: Listing =
            decode_body(StatusCode::OK, r#"{"files": [], "folders": []}"#).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_decode_body_error_field_beats_2xx() {
        // An `error` field in the body fails the call even on HTTP 200.
        let result: Result<MessageResponse> =
            decode_body(StatusCode::OK, r#"{"error": "Folder already exists"}"#);
        match result {
            Err(VaultError::Api(message)) => assert_eq!(message, "Folder already exists"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_missing_envelope_key() {
        // HTTP 200 with a body lacking the expected `folder` key fails.
        let result: Result<FolderResponse> =
            decode_body(StatusCode::OK, r#"{"message": "Folder created successfully"}"#);
        assert!(matches!(result, Err(VaultError::InvalidResponse)));
    }

    #[test]
    fn test_decode_body_error_status_with_message() {
        let result: Result<MessageResponse> = decode_body(
            StatusCode::NOT_FOUND,
            r#"{"error": "File not found or access denied"}"#,
        );
        match result {
            Err(VaultError::Api(message)) => {
                assert_eq!(message, "File not found or access denied")
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_error_status_without_body() {
        let result: Result<MessageResponse> =
            decode_body(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(result, Err(VaultError::Http(500))));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Documents ").unwrap(), "Documents");
        assert!(matches!(validate_name(""), Err(VaultError::EmptyName)));
        assert!(matches!(validate_name("   "), Err(VaultError::EmptyName)));
    }
}
