//! Navigation state and rendering.

mod breadcrumb;
mod navigator;

pub use breadcrumb::{Breadcrumb, FolderRef};
pub use navigator::{BatchReport, Navigator};
