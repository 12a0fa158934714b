//! Display helpers for listings.

/// Size units used for display. TB is the ceiling; larger values stay
/// expressed in TB.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count for display, e.g. `1536` -> `"1.50 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, UNITS[unit])
}

/// Broad file classification derived from a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Archive,
    Text,
    Other,
}

impl FileKind {
    /// Classify a MIME type. Unknown or absent types map to `Other`.
    pub fn from_mime(mime: Option<&str>) -> Self {
        let mime = match mime {
            Some(m) => m,
            None => return FileKind::Other,
        };

        if mime.starts_with("image/") {
            FileKind::Image
        } else if mime.starts_with("video/") {
            FileKind::Video
        } else if mime.starts_with("audio/") {
            FileKind::Audio
        } else if mime.contains("pdf") {
            FileKind::Pdf
        } else if mime.contains("word") || mime.contains("document") {
            FileKind::Document
        } else if mime.contains("excel") || mime.contains("spreadsheet") {
            FileKind::Spreadsheet
        } else if mime.contains("powerpoint") || mime.contains("presentation") {
            FileKind::Presentation
        } else if mime.contains("zip") || mime.contains("rar") || mime.contains("compressed") {
            FileKind::Archive
        } else if mime.contains("text") || mime.contains("json") || mime.contains("xml") {
            FileKind::Text
        } else {
            FileKind::Other
        }
    }

    /// Short tag used in listing rows, e.g. `[IMG]`.
    pub fn tag(&self) -> &'static str {
        match self {
            FileKind::Image => "IMG",
            FileKind::Video => "VID",
            FileKind::Audio => "AUD",
            FileKind::Pdf => "PDF",
            FileKind::Document => "DOC",
            FileKind::Spreadsheet => "XLS",
            FileKind::Presentation => "PPT",
            FileKind::Archive => "ZIP",
            FileKind::Text => "TXT",
            FileKind::Other => "FILE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.00 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_tb() {
        // Even absurd sizes stay in TB.
        assert!(format_file_size(u64::MAX).ends_with(" TB"));
        assert_eq!(format_file_size(1024_u64.pow(4)), "1.00 TB");
        assert_eq!(format_file_size(1024_u64.pow(5)), "1024.00 TB");
    }

    #[test]
    fn test_file_kind_classification() {
        assert_eq!(FileKind::from_mime(Some("image/png")), FileKind::Image);
        assert_eq!(FileKind::from_mime(Some("video/mp4")), FileKind::Video);
        assert_eq!(FileKind::from_mime(Some("audio/mpeg")), FileKind::Audio);
        assert_eq!(FileKind::from_mime(Some("application/pdf")), FileKind::Pdf);
        assert_eq!(
            FileKind::from_mime(Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")),
            FileKind::Document
        );
        assert_eq!(
            FileKind::from_mime(Some("application/vnd.ms-excel")),
            FileKind::Spreadsheet
        );
        assert_eq!(FileKind::from_mime(Some("application/zip")), FileKind::Archive);
        assert_eq!(FileKind::from_mime(Some("application/json")), FileKind::Text);
        assert_eq!(FileKind::from_mime(Some("application/octet-stream")), FileKind::Other);
        assert_eq!(FileKind::from_mime(None), FileKind::Other);
    }
}
