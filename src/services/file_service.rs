use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use log::{debug, error, info, warn};
use crate::errors::ShareError;
use crate::types::DirEntry;

/// Contents and metadata of a file about to be served
#[derive(Debug)]
pub struct ServedFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub modified: Option<SystemTime>,
}

/// Service for handling file system operations inside the share directory
#[derive(Clone)]
pub struct FileService {
    share_dir: PathBuf,
}

impl FileService {
    /// Create a new file service
    pub fn new(share_dir: PathBuf) -> Self {
        debug!("Creating FileService with share directory: {:?}", share_dir);
        Self { share_dir }
    }

    /// Whether a traversal-free relative path names a directory
    pub fn is_dir(&self, path: &Path) -> bool {
        self.share_dir.join(path).is_dir()
    }

    /// Non-hidden entries of a directory under the share root, sorted by name bytes.
    ///
    /// `path` is relative to the share root; an empty path lists the root.
    pub fn list_entries(&self, path: &Path) -> Result<Vec<DirEntry>, ShareError> {
        let full_path = self.share_dir.join(path);
        if !full_path.is_dir() {
            warn!("Directory does not exist: {:?}", full_path);
            return Err(ShareError::NotFound);
        }
        let entries = fs::read_dir(&full_path).map_err(|e| {
            error!("Failed to read directory {:?}: {}", full_path, e);
            ShareError::Io(e)
        })?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };
            // A lossy name would link to a file that does not exist
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping entry with non UTF-8 name: {:?}", raw);
                    continue;
                }
            };
            if name.starts_with('.') {
                continue;
            }
            // Follows symlinks so linked files and directories show up like real ones
            let is_dir = fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false);
            debug!("Found entry: {} (is_dir: {})", name, is_dir);
            result.push(if is_dir { DirEntry::directory(name) } else { DirEntry::new(name) });
        }

        result.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        info!("Listed {:?}, found {} entries", full_path, result.len());
        Ok(result)
    }

    /// Read a file addressed by a normalized, traversal-free relative path
    pub fn read_file(&self, path: &Path) -> Result<ServedFile, ShareError> {
        let full_path = self.share_dir.join(path);
        debug!("Reading file: {:?} (full path: {:?})", path, full_path);

        if !full_path.is_file() {
            warn!("File does not exist: {:?}", full_path);
            return Err(ShareError::NotFound);
        }

        let bytes = fs::read(&full_path).map_err(|e| {
            error!("Failed to read file {:?}: {}", full_path, e);
            ShareError::Io(e)
        })?;
        let modified = fs::metadata(&full_path).and_then(|m| m.modified()).ok();

        info!("Serving {:?}, {} bytes", path, bytes.len());
        Ok(ServedFile {
            bytes,
            content_type: content_type_for(path),
            modified,
        })
    }
}

/// Determine content type for a file
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        _ => "application/octet-stream",
    }
}
