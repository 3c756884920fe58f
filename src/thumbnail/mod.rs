//! Screenshot thumbnails and visit links for gallery cards.
//!
//! Only demo cards fetch a remote screenshot. Submitted projects show the
//! screenshot their author uploaded, or nothing.

pub mod demo;
pub mod fetch;

pub use demo::{demo_projects, DemoProject};
pub use fetch::{create_client, fetch_thumbnail, fetch_thumbnails, Thumbnail};

use crate::config::ThumbnailConfig;

/// Strip a leading `http://` or `https://`
pub fn clean_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// URL to open when a visitor clicks through; bare hosts get `https://`
pub fn visit_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Screenshot service URL for a project
pub fn thumbnail_url(config: &ThumbnailConfig, url: &str) -> String {
    format!(
        "{}/width/{}/crop/{}/noanimate/{}",
        config.service.trim_end_matches('/'),
        config.width,
        config.crop,
        clean_url(url)
    )
}

/// Static placeholder shown when the screenshot cannot be loaded
pub fn placeholder_url(config: &ThumbnailConfig, title: &str) -> String {
    format!(
        "/placeholder.svg?height={}&width={}&text={}",
        config.crop,
        config.width,
        urlencoding::encode(title)
    )
}
