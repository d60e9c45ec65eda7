use qrcode::{Color, QrCode};

use crate::errors::ShareError;

const QUIET_ZONE: usize = 2;

/// Render `url` as a terminal QR code using Unicode half blocks.
///
/// Dark modules are drawn as spaces and light modules as blocks, so the code
/// scans on the usual dark terminal background.
pub fn render_terminal(url: &str) -> Result<String, ShareError> {
    let code = QrCode::new(url.as_bytes()).map_err(|e| ShareError::Qr(e.to_string()))?;
    let width = code.width();
    let colors = code.to_colors();

    let full = width + QUIET_ZONE * 2;
    let is_dark = |row: usize, col: usize| -> bool {
        if row < QUIET_ZONE || col < QUIET_ZONE {
            return false;
        }
        let (r, c) = (row - QUIET_ZONE, col - QUIET_ZONE);
        r < width && c < width && colors[r * width + c] == Color::Dark
    };

    let mut out = String::new();
    for row in (0..full).step_by(2) {
        for col in 0..full {
            let ch = match (is_dark(row, col), is_dark(row + 1, col)) {
                (true, true) => ' ',
                (true, false) => '\u{2584}',
                (false, true) => '\u{2580}',
                (false, false) => '\u{2588}',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_block_characters() {
        let qr = render_terminal("http://192.168.1.5:8000").unwrap();
        let lines: Vec<&str> = qr.lines().collect();
        assert!(lines.len() > 10);
        assert!(qr.contains('\u{2588}'));
        let first = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == first));
    }
}
