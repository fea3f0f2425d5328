//! Declarative bundle configuration.
//!
//! This module provides [`BundleConfig`], the build options an external
//! bundler consumes to package named entry modules, along with loading,
//! validation, artifact planning, and output directory preparation.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_deployer::bundle::{BundleConfigBuilder, OutputFormat, Target};
//!
//! # fn example() -> kodegen_deployer::bundle::Result<()> {
//! let config = BundleConfigBuilder::new()
//!     .entry("mud.config", "mud.config.ts")
//!     .target(Target::EsNext)
//!     .format(OutputFormat::Esm)
//!     .dts(true)
//!     .sourcemap(true)
//!     .build()?;
//!
//! for artifact in config.artifacts() {
//!     println!("{}", artifact.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Standalone `bundle.toml`, or the `[package.metadata.bundle]` table of a
//! `Cargo.toml`:
//!
//! ```toml
//! target = "esnext"
//! format = ["esm"]
//! dts = true
//! sourcemap = true
//! clean = true
//! minify = true
//!
//! [entry]
//! "mud.config" = "mud.config.ts"
//! ```

mod artifacts;
mod builder;
mod config;
pub mod error;
mod fs;
mod loader;

pub use artifacts::{ArtifactKind, PlannedArtifact};
pub use builder::BundleConfigBuilder;
pub use config::{BundleConfig, OutputFormat, Target};
pub use error::{Error, Result};
pub use fs::prepare_output_dir;
pub use loader::load_config;
