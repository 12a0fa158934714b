//! Server-provided record types and response envelopes.
//!
//! These mirror the JSON bodies produced by the FileVault backend. The
//! client treats them as opaque beyond a single render pass: nothing is
//! validated or cached client-side.

use serde::{Deserialize, Serialize};

use crate::format::FileKind;

/// A file record as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    /// Server-assigned file identifier.
    pub id: i64,
    /// Display name (the original upload filename).
    pub name: String,
    /// Stored filename, which may differ from `name` for uniqueness.
    #[serde(default)]
    pub filename: Option<String>,
    /// Containing folder, `None` for root.
    #[serde(default)]
    pub folder_id: Option<i64>,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, if the server could determine one.
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl FileEntry {
    /// Classify this file by its MIME type.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(self.mime_type.as_deref())
    }
}

/// A folder record as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderEntry {
    /// Server-assigned folder identifier.
    pub id: i64,
    /// Folder display name.
    pub name: String,
    /// Parent folder, `None` for a folder directly under root.
    #[serde(default)]
    pub parent_folder_id: Option<i64>,
    /// Full path from root, as tracked by the server.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The contents of one folder: its files and subfolders.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub files: Vec<FileEntry>,
    pub folders: Vec<FolderEntry>,
    /// The folder these entries belong to, `None` for root.
    #[serde(default)]
    pub current_folder_id: Option<i64>,
}

impl Listing {
    /// True when the folder holds neither files nor subfolders.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }
}

/// Account identity as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response envelope for `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Response envelope for endpoints returning a user record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: UserInfo,
}

/// Response envelope for endpoints returning a file record.
#[derive(Debug, Clone, Deserialize)]
pub struct FileResponse {
    pub file: FileEntry,
}

/// Response envelope for endpoints returning a folder record.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderResponse {
    pub folder: FolderEntry,
}

/// Response envelope for endpoints returning only a status message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
