//! File operations: listing, transfer, and mutation.

use futures::StreamExt;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{parse_json, validate_name, Client};
use crate::error::{Result, VaultError};
use crate::types::{FileEntry, FileResponse, Listing, MessageResponse};

/// Fallback name when the server sends no usable `Content-Disposition`.
const DEFAULT_DOWNLOAD_NAME: &str = "download";

impl Client {
    /// List the files and folders inside a folder (`None` = root).
    pub async fn list(&self, folder_id: Option<i64>) -> Result<Listing> {
        self.require_auth()?;
        debug!(?folder_id, "listing folder");

        let response = match folder_id {
            Some(id) => {
                self.http()
                    .get_with_query("/files/list", &[("folder_id", id.to_string())])
                    .await?
            }
            None => self.http().get("/files/list").await?,
        };

        parse_json(response).await
    }

    /// List the currently viewed folder.
    pub async fn list_current(&self) -> Result<Listing> {
        self.list(self.current_folder()).await
    }

    /// Upload a local file.
    ///
    /// The multipart part is named `file` and carries the local
    /// filename plus a guessed MIME type. When `folder_id` is `None`
    /// the current-folder pointer is used as the destination. The
    /// request is sent once; batch callers continue past per-file
    /// failures and count successes.
    pub async fn upload(&self, path: &Path, folder_id: Option<i64>) -> Result<FileEntry> {
        self.require_auth()?;

        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = Part::bytes(data)
            .file_name(filename.clone())
            .mime_str(mime.as_ref())
            .map_err(|e| VaultError::Custom(format!("Multipart error: {}", e)))?;

        let mut form = Form::new().part("file", part);
        if let Some(id) = folder_id.or_else(|| self.current_folder()) {
            form = form.text("folder_id", id.to_string());
        }

        let response = self.http().post_multipart("/files/upload", form).await?;
        let uploaded: FileResponse = parse_json(response).await?;
        info!(name = %uploaded.file.name, id = uploaded.file.id, "uploaded file");

        Ok(uploaded.file)
    }

    /// Download a file into a writer.
    ///
    /// Returns the filename the server advertised. Any non-2xx status
    /// signals [`VaultError::DownloadFailed`].
    pub async fn download_to_writer<W: Write + ?Sized>(
        &self,
        file_id: i64,
        writer: &mut W,
    ) -> Result<String> {
        let (filename, response) = self.start_download(file_id).await?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            writer.write_all(&chunk?)?;
        }

        Ok(filename)
    }

    /// Download a file into a directory, named by the server.
    ///
    /// The body is streamed to a temporary file in `dest_dir` which is
    /// renamed into place on completion and removed on failure.
    ///
    /// # Returns
    /// The full path of the downloaded file.
    pub async fn download_to_file(&self, file_id: i64, dest_dir: &Path) -> Result<PathBuf> {
        let (filename, response) = self.start_download(file_id).await?;

        let temp_path = dest_dir.join(format!(".vaulttmp.{}", file_id));
        let result = async {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                writer.write_all(&chunk?)?;
            }
            writer.flush()?;
            Ok::<_, VaultError>(())
        }
        .await;

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        let target = dest_dir.join(&filename);
        fs::rename(&temp_path, &target)?;
        info!(path = %target.display(), "downloaded file");

        Ok(target)
    }

    async fn start_download(&self, file_id: i64) -> Result<(String, reqwest::Response)> {
        self.require_auth()?;

        let response = self
            .http()
            .get(&format!("/files/download/{}", file_id))
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VaultError::DownloadFailed(status.as_u16()));
        }

        let filename = filename_from_disposition(
            response
                .headers()
                .get(CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok()),
        );

        Ok((filename, response))
    }

    /// Delete a file.
    pub async fn delete_file(&self, file_id: i64) -> Result<MessageResponse> {
        self.require_auth()?;
        let response = self.http().delete(&format!("/files/{}", file_id)).await?;
        parse_json(response).await
    }

    /// Rename a file. The new name must not be empty.
    pub async fn rename_file(&self, file_id: i64, new_name: &str) -> Result<FileEntry> {
        self.require_auth()?;
        let new_name = validate_name(new_name)?;

        let response = self
            .http()
            .put_json(
                &format!("/files/{}/rename", file_id),
                &json!({ "new_name": new_name }),
            )
            .await?;

        let renamed: FileResponse = parse_json(response).await?;
        Ok(renamed.file)
    }

    /// Move a file into another folder (`None` = root).
    pub async fn move_file(&self, file_id: i64, target_folder: Option<i64>) -> Result<FileEntry> {
        self.require_auth()?;

        let response = self
            .http()
            .put_json(
                &format!("/files/{}/move", file_id),
                &json!({ "folder_id": target_folder }),
            )
            .await?;

        let moved: FileResponse = parse_json(response).await?;
        Ok(moved.file)
    }
}

/// Extract a filename from a `Content-Disposition` header value.
///
/// Splits on `filename=` and strips quotes and trailing parameters.
/// The `filename*=` encoded form is not handled; an absent or
/// unusable header falls back to a fixed default name.
pub fn filename_from_disposition(header: Option<&str>) -> String {
    let header = match header {
        Some(h) => h,
        None => return DEFAULT_DOWNLOAD_NAME.to_string(),
    };

    match header.split_once("filename=") {
        Some((_, rest)) => {
            let name = rest
                .split(';')
                .next()
                .unwrap_or(rest)
                .trim()
                .trim_matches('"');
            if name.is_empty() {
                DEFAULT_DOWNLOAD_NAME.to_string()
            } else {
                name.to_string()
            }
        }
        None => DEFAULT_DOWNLOAD_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_quoted_disposition() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="report.pdf""#)),
            "report.pdf"
        );
    }

    #[test]
    fn test_filename_from_unquoted_disposition() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=notes.txt")),
            "notes.txt"
        );
    }

    #[test]
    fn test_filename_with_trailing_parameters() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="a b.png"; size=42"#)),
            "a b.png"
        );
    }

    #[test]
    fn test_missing_header_falls_back_to_default() {
        assert_eq!(filename_from_disposition(None), "download");
    }

    #[test]
    fn test_header_without_filename_falls_back_to_default() {
        assert_eq!(filename_from_disposition(Some("inline")), "download");
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=")),
            "download"
        );
    }
}
