use std::path::{Component, Path};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::errors::ShareError;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Percent-encode a file name for use as a relative URL
pub fn encode_url_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Normalize request path
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Reject request paths that climb out of the share directory
pub fn ensure_safe_path(req_path: &str) -> Result<(), ShareError> {
    for comp in Path::new(req_path).components() {
        match comp {
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ShareError::InvalidPath)
            }
            _ => {}
        }
    }
    Ok(())
}

/// Final component of a client-supplied file name.
///
/// Both `/` and `\` count as separators so Windows browsers that send full
/// paths end up with the bare name. Returns `None` for names that do not
/// denote a file (`""`, `.`, `..`).
pub fn basename(file_name: &str) -> Option<&str> {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or("");
    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}

/// Format a modification time as an HTTP-date (RFC 7231)
pub fn http_date(mtime: SystemTime) -> Option<String> {
    let secs = mtime.duration_since(UNIX_EPOCH).ok()?.as_secs();
    let dt = OffsetDateTime::from_unix_timestamp(i64::try_from(secs).ok()?).ok()?;
    let fmt = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    dt.format(fmt).ok()
}
