use anyhow::{Context, Result};
use tracing::debug;

use crate::thumbnail::visit_url;

/// Open a project in the user's default browser
///
/// # Arguments
/// * `url` - The project URL as submitted; bare hosts are opened over https
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<String> {
    let target = visit_url(url);
    debug!(url = %target, "opening browser");
    webbrowser::open(&target)
        .with_context(|| format!("Failed to open browser for URL: {}", target))?;
    Ok(target)
}
