//! Navigation controller: breadcrumb tracking, listing rendering, and
//! the load/refresh cycle around every mutating action.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::breadcrumb::{Breadcrumb, FolderRef};
use crate::client::Client;
use crate::error::Result;
use crate::format::format_file_size;
use crate::progress::{BatchProgress, ProgressCallback};
use crate::types::{FileEntry, FolderEntry, Listing};

/// Label for the breadcrumb root entry.
const ROOT_LABEL: &str = "Home";

/// Outcome of a batch upload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Requests attempted (one per file, failures included).
    pub attempted: usize,
    /// Files the server accepted.
    pub succeeded: usize,
    /// Files that failed to upload.
    pub failed: usize,
}

/// Navigation controller over one [`Client`].
///
/// Owns the breadcrumb path and drives the full-reload cycle: every
/// state-changing action re-fetches the current folder's listing and
/// re-renders it. There are no incremental updates and no client-side
/// cache; the only intermediate state is "in flight".
pub struct Navigator {
    client: Client,
    breadcrumb: Breadcrumb,
}

impl Navigator {
    /// Create a navigator positioned at root.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            breadcrumb: Breadcrumb::new(),
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The current breadcrumb path.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// Navigate into a folder (`None` = root) and render its contents.
    ///
    /// The listing is loaded first; only on success are the
    /// current-folder pointer and the breadcrumb committed, so a failed
    /// navigation leaves the view state untouched.
    pub async fn navigate_to<W: Write + ?Sized>(
        &mut self,
        target: Option<FolderRef>,
        out: &mut W,
    ) -> Result<()> {
        let folder_id = target.as_ref().map(|f| f.id);
        let listing = self.client.list(folder_id).await?;

        self.client.set_current_folder(folder_id);
        match target {
            Some(folder) => self.breadcrumb.enter(folder),
            None => self.breadcrumb.clear(),
        }

        self.render_trail(out)?;
        self.render(&listing, out)?;
        Ok(())
    }

    /// Re-fetch and re-render the current folder. Breadcrumb unchanged.
    pub async fn refresh<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        let listing = self.client.list_current().await?;
        self.render_trail(out)?;
        self.render(&listing, out)?;
        Ok(())
    }

    /// Render the breadcrumb trail. Every entry but the last names an
    /// ancestor one can navigate back to; the last is the current
    /// location.
    pub fn render_trail<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write!(out, "\n{}", ROOT_LABEL)?;
        for entry in self.breadcrumb.entries() {
            write!(out, " / {}", entry.name)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Render a listing: folders before files, fixed ordering, with a
    /// placeholder for an empty folder. Every row carries the id the
    /// per-item actions take.
    pub fn render<W: Write + ?Sized>(&self, listing: &Listing, out: &mut W) -> Result<()> {
        if listing.is_empty() {
            writeln!(out, "  (empty)")?;
            return Ok(());
        }

        for folder in &listing.folders {
            writeln!(out, "  [DIR]  {:<40} (id {})", folder.name, folder.id)?;
        }
        for file in &listing.files {
            writeln!(
                out,
                "  [{:<4}] {:<40} {:>10}  (id {})",
                file.kind().tag(),
                file.name,
                format_file_size(file.size),
                file.id
            )?;
        }
        Ok(())
    }

    /// Upload a batch of local files into the current folder.
    ///
    /// Uploads are strictly sequential, one in-flight request at a
    /// time. After each accepted file the progress callback observes
    /// `succeeded/total`; a failed file is reported and skipped without
    /// aborting the rest. Exactly one listing refresh runs after the
    /// whole batch, not one per file.
    pub async fn upload_batch<W: Write + ?Sized>(
        &mut self,
        paths: &[PathBuf],
        mut progress: Option<ProgressCallback>,
        out: &mut W,
    ) -> Result<BatchReport> {
        let total = paths.len();
        let mut report = BatchReport::default();

        for path in paths {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string();
            report.attempted += 1;

            match self.client.upload(path, None).await {
                Ok(_) => {
                    report.succeeded += 1;
                    if let Some(callback) = progress.as_mut() {
                        callback(&BatchProgress::new(report.succeeded, total, &name));
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(file = %name, error = %e, "upload failed");
                    writeln!(out, "  failed to upload {}: {}", name, e)?;
                }
            }
        }

        writeln!(out, "Uploaded {} of {} file(s)", report.succeeded, total)?;
        self.refresh(out).await?;
        Ok(report)
    }

    /// Create a folder inside the current folder, then refresh.
    pub async fn create_folder_here<W: Write + ?Sized>(
        &mut self,
        name: &str,
        out: &mut W,
    ) -> Result<FolderEntry> {
        let parent = self.client.current_folder();
        let folder = self.client.create_folder(name, parent).await?;
        self.refresh(out).await?;
        Ok(folder)
    }

    /// Delete a file, then refresh.
    pub async fn delete_file<W: Write + ?Sized>(&mut self, file_id: i64, out: &mut W) -> Result<()> {
        self.client.delete_file(file_id).await?;
        self.refresh(out).await?;
        Ok(())
    }

    /// Delete a folder and its contents, then refresh.
    pub async fn delete_folder<W: Write + ?Sized>(
        &mut self,
        folder_id: i64,
        out: &mut W,
    ) -> Result<()> {
        self.client.delete_folder(folder_id).await?;
        self.refresh(out).await?;
        Ok(())
    }

    /// Rename a file, then refresh.
    pub async fn rename_file<W: Write + ?Sized>(
        &mut self,
        file_id: i64,
        new_name: &str,
        out: &mut W,
    ) -> Result<FileEntry> {
        let file = self.client.rename_file(file_id, new_name).await?;
        self.refresh(out).await?;
        Ok(file)
    }

    /// Rename a folder, then refresh.
    pub async fn rename_folder<W: Write + ?Sized>(
        &mut self,
        folder_id: i64,
        new_name: &str,
        out: &mut W,
    ) -> Result<FolderEntry> {
        let folder = self.client.rename_folder(folder_id, new_name).await?;
        self.refresh(out).await?;
        Ok(folder)
    }

    /// Move a file into another folder (`None` = root), then refresh.
    pub async fn move_file<W: Write + ?Sized>(
        &mut self,
        file_id: i64,
        target_folder: Option<i64>,
        out: &mut W,
    ) -> Result<FileEntry> {
        let file = self.client.move_file(file_id, target_folder).await?;
        self.refresh(out).await?;
        Ok(file)
    }

    /// Download a file into a directory. Does not refresh: downloads
    /// change nothing server-side.
    pub async fn download(&self, file_id: i64, dest_dir: &Path) -> Result<PathBuf> {
        self.client.download_to_file(file_id, dest_dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Listing;

    fn navigator() -> Navigator {
        Navigator::new(Client::new("http://localhost:5000"))
    }

    fn render_to_string(nav: &Navigator, listing: &Listing) -> String {
        let mut out = Vec::new();
        nav.render(listing, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_listing() -> Listing {
        serde_json::from_str(
            r#"{
                "files": [
                    {"id": 10, "name": "song.mp3", "size": 1536, "mime_type": "audio/mpeg"},
                    {"id": 11, "name": "photo.png", "size": 2048, "mime_type": "image/png"}
                ],
                "folders": [
                    {"id": 5, "name": "Documents"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_empty_listing_placeholder() {
        let listing: Listing =
            serde_json::from_str(r#"{"files": [], "folders": []}"#).unwrap();
        let output = render_to_string(&navigator(), &listing);
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_render_folders_before_files() {
        let output = render_to_string(&navigator(), &sample_listing());

        let dir_pos = output.find("Documents").unwrap();
        let file_pos = output.find("song.mp3").unwrap();
        assert!(dir_pos < file_pos, "folders must render before files");

        assert!(output.contains("[DIR]"));
        assert!(output.contains("[AUD ]"));
        assert!(output.contains("1.50 KB"));
        assert!(output.contains("(id 5)"));
        assert!(output.contains("(id 10)"));
    }

    #[test]
    fn test_render_trail_shows_ancestor_chain() {
        let mut nav = navigator();
        nav.breadcrumb.enter(FolderRef::new(1, "Documents"));
        nav.breadcrumb.enter(FolderRef::new(2, "Photos"));

        let mut out = Vec::new();
        nav.render_trail(&mut out).unwrap();
        let trail = String::from_utf8(out).unwrap();
        assert!(trail.contains("Home / Documents / Photos"));
    }

    #[test]
    fn test_render_trail_at_root() {
        let mut out = Vec::new();
        navigator().render_trail(&mut out).unwrap();
        let trail = String::from_utf8(out).unwrap();
        assert!(trail.contains("Home"));
        assert!(!trail.contains('/'));
    }
}
