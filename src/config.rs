//! Loading and writing the admin config file (`useradmin.json`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::AdminConfig;

pub const CONFIG_FILE: &str = "useradmin.json";

/// Resolves the config for this run.
///
/// An explicit path must exist. Without one, `./useradmin.json` is used when
/// present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<AdminConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = PathBuf::from(CONFIG_FILE);
            if path.is_file() {
                read_config(&path)
            } else {
                Ok(AdminConfig::default())
            }
        }
    }
}

pub fn read_config(path: &Path) -> Result<AdminConfig> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AdminConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    if cfg.version != 1 {
        anyhow::bail!(
            "unsupported config version {} in {}",
            cfg.version,
            path.display()
        );
    }
    Ok(cfg)
}

pub fn write_config(path: &Path, cfg: &AdminConfig) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
    write_atomic(path, &bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
