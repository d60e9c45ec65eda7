pub mod file_service;
pub mod upload_service;

pub use file_service::{FileService, ServedFile};
pub use upload_service::UploadService;
