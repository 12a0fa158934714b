//! Authentication operations.

use serde_json::json;
use tracing::info;

use super::{parse_json, Client};
use crate::error::Result;
use crate::types::{LoginResponse, MessageResponse, UserInfo, UserResponse};

impl Client {
    /// Log in with email and password.
    ///
    /// On success the returned access token is adopted by this client,
    /// so subsequent calls are authenticated. Persisting it between
    /// runs is up to the caller (see [`crate::config::ClientConfig`]).
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = json!({ "email": email, "password": password });
        let response = self.http().post_json("/auth/login", &body).await?;
        let login: LoginResponse = parse_json(response).await?;

        self.set_token(Some(login.access_token.clone()));
        info!(username = %login.user.username, "logged in");

        Ok(login)
    }

    /// Register a new account.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<UserInfo> {
        let body = json!({
            "username": username,
            "email": email,
            "password": password
        });
        let response = self.http().post_json("/auth/register", &body).await?;
        let registered: UserResponse = parse_json(response).await?;
        Ok(registered.user)
    }

    /// Log out of the current session and drop the local token.
    pub async fn logout(&mut self) -> Result<MessageResponse> {
        self.require_auth()?;
        let response = self.http().post_json("/auth/logout", &json!({})).await?;
        let message = parse_json(response).await?;
        self.set_token(None);
        Ok(message)
    }

    /// Fetch the identity of the logged-in user.
    pub async fn me(&self) -> Result<UserInfo> {
        self.require_auth()?;
        let response = self.http().get("/auth/me").await?;
        let user: UserResponse = parse_json(response).await?;
        Ok(user.user)
    }
}
