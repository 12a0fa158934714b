//! Folder mutation operations.

use serde_json::json;
use tracing::info;

use super::{parse_json, validate_name, Client};
use crate::error::Result;
use crate::types::{FolderEntry, FolderResponse, MessageResponse};

impl Client {
    /// Create a folder under a parent (`None` = root).
    ///
    /// The name must not be empty; validation happens before any
    /// request is made.
    pub async fn create_folder(&self, name: &str, parent_id: Option<i64>) -> Result<FolderEntry> {
        self.require_auth()?;
        let name = validate_name(name)?;

        let body = json!({
            "name": name,
            "parent_folder_id": parent_id
        });
        let response = self.http().post_json("/folders/create", &body).await?;
        let created: FolderResponse = parse_json(response).await?;
        info!(name = %created.folder.name, id = created.folder.id, "created folder");

        Ok(created.folder)
    }

    /// Delete a folder and all of its contents.
    pub async fn delete_folder(&self, folder_id: i64) -> Result<MessageResponse> {
        self.require_auth()?;
        let response = self.http().delete(&format!("/folders/{}", folder_id)).await?;
        parse_json(response).await
    }

    /// Rename a folder. The new name must not be empty.
    pub async fn rename_folder(&self, folder_id: i64, new_name: &str) -> Result<FolderEntry> {
        self.require_auth()?;
        let new_name = validate_name(new_name)?;

        let response = self
            .http()
            .put_json(
                &format!("/folders/{}/rename", folder_id),
                &json!({ "new_name": new_name }),
            )
            .await?;

        let renamed: FolderResponse = parse_json(response).await?;
        Ok(renamed.folder)
    }
}
