//! Output directory preparation.

use std::io;
use std::path::PathBuf;

use tokio::fs;

use super::error::ErrorExt;
use super::{BundleConfig, Error, Result};

/// Prepares the output directory for a build.
///
/// When `clean` is set, removes the directory and everything in it first
/// (a missing directory is fine). Then creates it if needed.
///
/// # Returns
///
/// The output directory path.
pub async fn prepare_output_dir(config: &BundleConfig) -> Result<PathBuf> {
    let out_dir = config.out_dir();

    if config.clean {
        log::info!("cleaning {}", out_dir.display());
        match fs::remove_dir_all(out_dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(error) => {
                return Err(Error::Fs {
                    context: "removing output directory",
                    path: out_dir.to_path_buf(),
                    error,
                });
            }
        }
    }

    // create_dir_all is idempotent
    fs::create_dir_all(out_dir)
        .await
        .fs_context("creating output directory", out_dir)?;

    Ok(out_dir.to_path_buf())
}
