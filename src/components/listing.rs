use std::collections::HashSet;
use std::path::Path;
use log::debug;
use crate::types::{DirEntry, IMAGE_EXTENSIONS, MediaKind};
use crate::utils::{encode_url_segment, escape_attr, escape_html};

/// Find the poster image for a video among the listed names.
///
/// For `base.ext` the candidates are `base.jpg`, `base.jpeg`, `base.png`,
/// `base.webp`, `base.gif` in that order; the first present name wins.
pub fn find_poster<'a>(video_name: &str, names: &HashSet<&'a str>) -> Option<&'a str> {
    let path = Path::new(video_name);
    let base = match path.extension() {
        Some(_) => path.file_stem().and_then(|s| s.to_str())?,
        None => video_name,
    };
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!("{}.{}", base, ext))
        .find_map(|candidate| names.get(candidate.as_str()).copied())
}

/// Component rendering the per-file grid items
pub struct ListingComponent;

impl ListingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render every entry as a grid item, in the order given
    pub fn render_items(&self, entries: &[DirEntry]) -> Vec<String> {
        let names: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        debug!("Rendering {} listing items", entries.len());
        entries
            .iter()
            .map(|entry| self.render_item(entry, &names))
            .collect()
    }

    /// Render a single entry according to its media kind
    pub fn render_item(&self, entry: &DirEntry, names: &HashSet<&str>) -> String {
        let mut href = escape_attr(&encode_url_segment(&entry.name));
        if entry.is_dir {
            href.push('/');
        }
        let label = escape_html(&entry.name);

        match entry.kind {
            MediaKind::Image => format!(
                "<div class='item'><a href='{href}'><img src='{href}' loading='lazy'><br>{label}</a></div>"
            ),
            MediaKind::Video => {
                let poster_attr = find_poster(&entry.name, names)
                    .map(|poster| {
                        format!(" poster='{}'", escape_attr(&encode_url_segment(poster)))
                    })
                    .unwrap_or_default();
                format!(
                    "<div class='item'><video src='{href}'{poster_attr} controls preload='metadata' muted playsinline></video><div>{label}</div></div>"
                )
            }
            MediaKind::Other => format!(
                "<div class='item'>📄<br><a href='{href}'>{label}</a></div>"
            ),
        }
    }
}

impl Default for ListingComponent {
    fn default() -> Self {
        Self::new()
    }
}
