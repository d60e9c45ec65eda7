use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use axum::extract::Multipart;
use log::{debug, error, info, warn};
use crate::errors::ShareError;
use crate::utils::basename;

/// Form field carrying uploaded files
pub const FILE_FIELD: &str = "file";

/// Service writing multipart uploads into the share directory
#[derive(Clone)]
pub struct UploadService {
    share_dir: PathBuf,
}

impl UploadService {
    pub fn new(share_dir: PathBuf) -> Self {
        Self { share_dir }
    }

    /// Save every `file` part of the request and return the names written.
    ///
    /// Parts with an empty file name are skipped. Existing files with the
    /// same name are overwritten. A part whose body stream fails midway
    /// leaves the partial file behind.
    pub async fn save_all(&self, mut multipart: Multipart) -> Result<Vec<String>, ShareError> {
        let mut saw_file_field = false;
        let mut saved = Vec::new();

        while let Some(mut field) = multipart.next_field().await? {
            if field.name() != Some(FILE_FIELD) {
                debug!("Ignoring form field {:?}", field.name());
                continue;
            }
            saw_file_field = true;

            let name = match field.file_name().and_then(basename) {
                Some(name) => name.to_string(),
                None => {
                    debug!("Skipping part without a usable file name: {:?}", field.file_name());
                    continue;
                }
            };

            let target = self.share_dir.join(&name);
            let mut out = File::create(&target).map_err(|e| {
                error!("Failed to create {:?}: {}", target, e);
                ShareError::Io(e)
            })?;

            let mut written = 0usize;
            while let Some(chunk) = field.chunk().await.map_err(|e| {
                warn!("Upload of {} interrupted after {} bytes", name, written);
                ShareError::from(e)
            })? {
                out.write_all(&chunk)?;
                written += chunk.len();
            }
            out.flush()?;

            info!("[UPLOAD] {}", name);
            saved.push(name);
        }

        if !saw_file_field {
            return Err(ShareError::MissingFileField);
        }
        if saved.is_empty() {
            return Err(ShareError::NoValidFiles);
        }
        Ok(saved)
    }
}
