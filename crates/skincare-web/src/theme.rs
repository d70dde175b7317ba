//! Page styling, computed once at startup.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use skincare_core::PageConfig;

/// Extensions tried, in order, when looking for the background image
pub const BACKGROUND_EXTENSIONS: [&str; 4] = ["webp", "jpg", "jpeg", "png"];

const BASE_CSS: &str = r#"
body { margin: 0; font-family: 'Segoe UI', sans-serif; background-color: #fff8f3; }
.app { display: flex; min-height: 100vh; }
.sidebar { width: 320px; padding: 1.5rem; background-color: #c04600; }
.sidebar, .sidebar * { color: #f0e0d7 !important; }
.sidebar label { display: block; margin-bottom: 1rem; }
.sidebar input { display: block; width: 100%; box-sizing: border-box; margin-top: 0.3rem;
    background-color: #d15410 !important; color: #f0e0d7 !important; border: 1px solid #f0e0d7; }
.sidebar button { background-color: #d15410; border: 1px solid #f0e0d7; padding: 0.4rem 1rem; }
.main { flex: 1; padding: 2rem 3rem; }
h1, h2, h3, h4, h5, h6 { color: #c04600 !important; }
.notice { padding: 0.75rem 1rem; border-radius: 8px; margin: 0.75rem 0; }
.notice-success { background-color: rgba(33, 195, 84, 0.25); }
.notice-info { background-color: rgba(28, 131, 225, 0.2); }
.notice-warning { background-color: rgba(255, 193, 7, 0.3); }
.notice-error { background-color: rgba(255, 43, 43, 0.25); }
.remedy-table { font-family: monospace; white-space: pre; overflow-x: auto; }
"#;

/// Background image embedded as a data URI
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pub path: PathBuf,
    pub mime: &'static str,
    data_base64: String,
}

impl BackgroundImage {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data_base64)
    }
}

/// Styling applied to every rendered page
#[derive(Debug, Clone, Default)]
pub struct PageStyle {
    background: Option<BackgroundImage>,
}

impl PageStyle {
    pub fn new(background: Option<BackgroundImage>) -> Self {
        Self { background }
    }

    /// Build the page style from config, looking for the background image once
    pub fn load(page: &PageConfig) -> Self {
        let background = discover_background(&page.asset_dir, &page.background_stem);
        match &background {
            Some(image) => tracing::info!("Using background image {}", image.path.display()),
            None => tracing::debug!(
                "No background image '{}' in {}",
                page.background_stem,
                page.asset_dir.display()
            ),
        }
        Self::new(background)
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    pub fn stylesheet(&self) -> String {
        let mut css = BASE_CSS.to_string();
        if let Some(image) = &self.background {
            css.push_str(&format!(
                r#"
body {{
    background: linear-gradient(rgba(255, 255, 255, 0.35), rgba(255, 255, 255, 0.15)),
                url("{}");
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
    background-attachment: fixed;
}}
.main {{
    background-color: rgba(255, 248, 243, 0.45);
    border-radius: 18px;
    margin: 2rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}}
"#,
                image.data_uri()
            ));
        }
        css
    }
}

/// Find `<stem>.<ext>` in `dir` for the first extension that exists and
/// embed it. A missing or unreadable file means no background.
pub fn discover_background(dir: &Path, stem: &str) -> Option<BackgroundImage> {
    let (path, ext) = BACKGROUND_EXTENSIONS
        .iter()
        .map(|ext| (dir.join(format!("{}.{}", stem, ext)), *ext))
        .find(|(path, _)| path.is_file())?;

    match std::fs::read(&path) {
        Ok(bytes) => Some(BackgroundImage {
            mime: mime_for(ext),
            data_base64: STANDARD.encode(bytes),
            path,
        }),
        Err(e) => {
            tracing::warn!("Failed to read background image {}: {}", path.display(), e);
            None
        }
    }
}

fn mime_for(ext: &str) -> &'static str {
    match ext {
        "webp" => "image/webp",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "image/png",
    }
}
