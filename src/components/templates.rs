/// Page title shown above the upload form
pub const PAGE_HEADING: &str = "📂 LAN Share";

const STYLE: &str = "<style>\n\
body{font-family:sans-serif;background:#0f172a;color:#e5e7eb;padding:10px}\n\
h2{text-align:center}\n\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(150px,1fr));gap:10px}\n\
.item{background:#020617;padding:8px;border-radius:10px;text-align:center}\n\
img,video{max-width:100%;max-height:130px;border-radius:6px}\n\
video{background:#000}\n\
a{color:#38bdf8;text-decoration:none;font-size:12px;word-break:break-all}\n\
form{margin-bottom:15px}\n\
</style>";

const UPLOAD_FORM: &str = "<form method=POST enctype=multipart/form-data>\n\
<input type=file name=file multiple>\n\
<br><br>\n\
<input type=submit value='Upload'>\n\
</form>";

/// Component for the HTML page shell around the listing grid
pub struct TemplateComponent;

impl TemplateComponent {
    pub fn new() -> Self {
        Self
    }

    /// Wrap rendered grid items in the full listing page
    pub fn render_page(&self, items: &[String]) -> String {
        let mut html = vec![
            "<!doctype html><html><head>".to_string(),
            "<meta charset='utf-8'>".to_string(),
            "<meta name='viewport' content='width=device-width, initial-scale=1'>".to_string(),
            format!("<title>{}</title>", PAGE_HEADING),
            STYLE.to_string(),
            "</head><body>".to_string(),
            format!("<h2>{}</h2>", PAGE_HEADING),
            UPLOAD_FORM.to_string(),
            "<div class='grid'>".to_string(),
        ];
        html.extend(items.iter().cloned());
        html.push("</div></body></html>".to_string());
        html.join("\n")
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}
