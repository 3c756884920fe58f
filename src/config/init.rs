use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::schema::Config;
use crate::scoring::ScoringConfig;

const HEADER: &str = "\
# showcase configuration
#
# scoring:     which hosts count as the recommended platform or an alternative
#              host, and which names look like placeholders
# submission:  simulated submission delay and the default author
# thumbnails:  screenshot service used for the demo gallery
";

/// Write a config file with every default spelled out.
///
/// Refuses to overwrite an existing file unless `force` is set. The write is
/// atomic, so an interrupted run never leaves a half-written config behind.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
        ..Config::default()
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .and_then(|_| file.write_all(yaml.as_bytes()))
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
