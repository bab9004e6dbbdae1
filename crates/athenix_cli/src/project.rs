//! Config scaffolding

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{AthenixConfig, CONFIG_FILE};

/// Write a default athenix.toml into `dir`. Refuses to overwrite unless
/// `force` is set.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    fs::create_dir_all(dir)?;
    let body = format!(
        "# Athenix preview configuration\n\n{}",
        AthenixConfig::default().to_toml()?
    );
    fs::write(&path, body)?;
    tracing::info!(path = %path.display(), "wrote config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("athenix-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_init_then_load() {
        let dir = scratch_dir("init");
        let path = init_config(&dir, false).unwrap();
        assert!(path.ends_with(CONFIG_FILE));

        let config = AthenixConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.preview.fps, 60);

        assert!(init_config(&dir, false).is_err());
        assert!(init_config(&dir, true).is_ok());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_config() {
        let dir = scratch_dir("missing");
        assert!(AthenixConfig::load_from_dir(&dir).is_err());
        assert!(AthenixConfig::load_or_default(&dir).is_ok());
    }
}
