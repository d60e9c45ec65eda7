use std::{fmt, io};
use axum::{http::StatusCode, response::{IntoResponse, Response}};

/// Error types for the share server
#[derive(Debug)]
pub enum ShareError {
    Io(io::Error),
    NotFound,
    InvalidPath,
    MissingFileField,
    NoValidFiles,
    Multipart(String),
    Discovery(String),
    Qr(String),
}

impl From<io::Error> for ShareError {
    fn from(err: io::Error) -> Self {
        ShareError::Io(err)
    }
}

impl From<axum::extract::multipart::MultipartError> for ShareError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ShareError::Multipart(err.body_text())
    }
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Io(e) => write!(f, "I/O error: {}", e),
            ShareError::NotFound => write!(f, "Not found"),
            ShareError::InvalidPath => write!(f, "Invalid path"),
            ShareError::MissingFileField => write!(f, "No file field"),
            ShareError::NoValidFiles => write!(f, "No valid files"),
            ShareError::Multipart(e) => write!(f, "Malformed upload: {}", e),
            ShareError::Discovery(e) => write!(f, "Network discovery failed: {}", e),
            ShareError::Qr(e) => write!(f, "QR error: {}", e),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShareError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl ShareError {
    pub fn status(&self) -> StatusCode {
        match self {
            ShareError::NotFound => StatusCode::NOT_FOUND,
            ShareError::InvalidPath
            | ShareError::MissingFileField
            | ShareError::NoValidFiles
            | ShareError::Multipart(_) => StatusCode::BAD_REQUEST,
            ShareError::Io(_) | ShareError::Discovery(_) | ShareError::Qr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_are_bad_requests() {
        assert_eq!(ShareError::MissingFileField.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ShareError::NoValidFiles.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ShareError::Multipart("eof".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_errors_are_server_errors() {
        let err = ShareError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ShareError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
