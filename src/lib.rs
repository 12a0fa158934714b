//! # vaultlib
//!
//! Rust client library for FileVault-compatible file storage servers.
//!
//! ## Features
//!
//! - **Authentication**: Login with email/password against the server's
//!   `/auth` endpoints; bearer token persisted between runs via a small
//!   config file.
//!   - Account registration support (`register`).
//! - **File & Folder Operations**:
//!   - List the contents of any folder (`list`).
//!   - Create folders (`create_folder`).
//!   - Rename, move, and delete files/folders.
//! - **File Transfers**:
//!   - Multipart upload with MIME detection.
//!   - Streaming download named by the server's `Content-Disposition`.
//!   - Sequential batch upload with per-item progress callbacks.
//! - **Navigation**:
//!   - Breadcrumb tracking with the truncate-or-append rule.
//!   - Listing rendering to any `std::io::Write` sink, refreshed by a
//!     full reload after every mutating action.
//!
//! State synchronization is by full reload: the client keeps no cache
//! beyond the current-folder pointer, and every mutating call is
//! followed by re-fetching the listing it affects.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use vaultlib::Client;
//!
//! # async fn example() -> vaultlib::Result<()> {
//! // Login
//! let mut client = Client::new("http://localhost:5000");
//! client.login("user@example.com", "password").await?;
//!
//! // List files in root
//! let listing = client.list(None).await?;
//! for file in &listing.files {
//!     println!("{} ({} bytes)", file.name, file.size);
//! }
//!
//! // Upload a file into root
//! client.upload(std::path::Path::new("local_file.txt"), None).await?;
//!
//! // Download a file into the current directory
//! client.download_to_file(42, std::path::Path::new(".")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Browsing with a Navigator
//!
//! ```no_run
//! use vaultlib::{Client, FolderRef, Navigator};
//!
//! # async fn example() -> vaultlib::Result<()> {
//! let config = vaultlib::config::ClientConfig::load_default()?;
//! let mut nav = Navigator::new(Client::from_config(&config));
//!
//! let mut out = std::io::stdout();
//! nav.navigate_to(None, &mut out).await?;
//! nav.navigate_to(Some(FolderRef::new(3, "Documents")), &mut out).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod nav;
pub mod progress;
pub mod types;

// Re-export commonly used types
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Result, VaultError};
pub use format::{format_file_size, FileKind};
pub use nav::{BatchReport, Breadcrumb, FolderRef, Navigator};
pub use progress::{BatchProgress, ProgressCallback};
pub use types::{FileEntry, FolderEntry, Listing, UserInfo};
