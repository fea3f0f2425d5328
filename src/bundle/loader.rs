//! Config loading from a standalone TOML file or a Cargo.toml.

use std::path::Path;

use super::error::{Context, ErrorExt};
use super::{BundleConfig, Error, Result};
use crate::bail;

/// Load and validate a bundle config.
///
/// A file named `Cargo.toml` is read through its `[package.metadata.bundle]`
/// table; any other `.toml` file is the config itself. Missing fields take
/// their defaults. A relative `out-dir` is resolved against the directory
/// holding the config file, and may not be that directory or one of its
/// ancestors, since `clean` removes it.
///
/// # Errors
///
/// - the file cannot be read or is not TOML
/// - a `Cargo.toml` has no `[package.metadata.bundle]` table
/// - the config fails [`BundleConfig::validate`]
/// - `out-dir` is, or contains, the directory holding the config file
pub fn load_config(path: &Path) -> Result<BundleConfig> {
    let is_manifest = path.file_name().is_some_and(|name| name == "Cargo.toml");
    if !is_manifest && path.extension().is_none_or(|ext| ext != "toml") {
        bail!("unsupported config file {}: expected a .toml file", path.display());
    }

    let text = std::fs::read_to_string(path).fs_context("reading bundle config", path)?;

    let mut config: BundleConfig = if is_manifest {
        let manifest: toml::Value = toml::from_str(&text)?;
        manifest
            .get("package")
            .and_then(|package| package.get("metadata"))
            .and_then(|metadata| metadata.get("bundle"))
            .cloned()
            .context(format!(
                "{} has no [package.metadata.bundle] table",
                path.display()
            ))?
            .try_into()?
    } else {
        toml::from_str(&text)?
    };

    config.validate()?;

    let config_dir = path.parent().unwrap_or(Path::new(""));
    if config.out_dir.is_relative() {
        config.out_dir = config_dir.join(&config.out_dir);
    }
    ensure_outside_config_dir(config_dir, &config.out_dir)?;

    log::debug!(
        "loaded bundle config from {} ({} entries)",
        path.display(),
        config.entry.len()
    );

    Ok(config)
}

/// Rejects an output directory that would take the config file with it.
fn ensure_outside_config_dir(config_dir: &Path, out_dir: &Path) -> Result<()> {
    // A missing out_dir cannot contain the (existing) config directory.
    let Ok(out_dir) = std::fs::canonicalize(out_dir) else {
        return Ok(());
    };
    let config_dir = if config_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        config_dir
    };
    let config_dir =
        std::fs::canonicalize(config_dir).fs_context("resolving config directory", config_dir)?;

    if config_dir.starts_with(&out_dir) {
        return Err(Error::InvalidConfig(format!(
            "out-dir {} contains the config directory {}",
            out_dir.display(),
            config_dir.display()
        )));
    }
    Ok(())
}
