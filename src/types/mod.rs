use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Image extensions, in poster lookup priority order
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Video extensions rendered with an inline player
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "webm", "mkv", "avi", "mov"];

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub share_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(share_dir: impl Into<PathBuf>) -> Self {
        Self { share_dir: Arc::new(share_dir.into()) }
    }
}

/// Preview category of a shared file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// Classify a file name by its extension, ignoring case
    pub fn from_name(name: &str) -> Self {
        let ext = match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return MediaKind::Other,
        };
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }
}

/// Directory entry information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: MediaKind,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(name: String) -> Self {
        let kind = MediaKind::from_name(&name);
        Self { name, kind, is_dir: false }
    }

    /// Sub-directories always render as plain links
    pub fn directory(name: String) -> Self {
        Self { name, kind: MediaKind::Other, is_dir: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(MediaKind::from_name("photo.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("clip.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_name("notes.txt"), MediaKind::Other);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(MediaKind::from_name("PHOTO.PNG"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("Holiday.MoV"), MediaKind::Video);
        assert_eq!(MediaKind::from_name("a.JpEg"), MediaKind::Image);
    }

    #[test]
    fn directories_are_other_whatever_the_name() {
        let entry = DirEntry::directory("holiday.mp4".to_string());
        assert_eq!(entry.kind, MediaKind::Other);
        assert!(entry.is_dir);
    }

    #[test]
    fn names_without_extension_are_other() {
        assert_eq!(MediaKind::from_name("jpg"), MediaKind::Other);
        assert_eq!(MediaKind::from_name("README"), MediaKind::Other);
        assert_eq!(MediaKind::from_name("archive.mp4.zip"), MediaKind::Other);
    }
}
