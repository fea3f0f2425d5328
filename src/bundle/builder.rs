//! Builder for constructing BundleConfig.

use std::path::{Path, PathBuf};

use super::{BundleConfig, OutputFormat, Result, Target};

/// Builder for constructing [`BundleConfig`].
///
/// Provides a fluent API with validation on [`build`](Self::build).
///
/// # Examples
///
/// ```no_run
/// use kodegen_deployer::bundle::{BundleConfigBuilder, OutputFormat};
///
/// # fn example() -> kodegen_deployer::bundle::Result<()> {
/// let config = BundleConfigBuilder::new()
///     .entry("index", "src/index.ts")
///     .format(OutputFormat::Esm)
///     .format(OutputFormat::Cjs)
///     .out_dir("build")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct BundleConfigBuilder {
    config: BundleConfig,
    formats: Option<Vec<OutputFormat>>,
}

impl BundleConfigBuilder {
    /// Creates a new builder with default options.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds an entry, replacing any previous entry with the same name.
    ///
    /// # Required
    ///
    /// At least one entry is required for building.
    pub fn entry(mut self, name: impl Into<String>, source: impl AsRef<Path>) -> Self {
        self.config
            .entry
            .insert(name.into(), source.as_ref().to_path_buf());
        self
    }

    /// Sets the output language-feature level.
    ///
    /// Default: [`Target::EsNext`]
    pub fn target(mut self, target: Target) -> Self {
        self.config.target = target;
        self
    }

    /// Adds an output format.
    ///
    /// Default: [`OutputFormat::Esm`] when no format is added
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.formats.get_or_insert_with(Vec::new).push(format);
        self
    }

    /// Replaces the output formats.
    pub fn formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = Some(formats);
        self
    }

    /// Requests type declaration files.
    pub fn dts(mut self, enabled: bool) -> Self {
        self.config.dts = enabled;
        self
    }

    /// Requests source maps.
    pub fn sourcemap(mut self, enabled: bool) -> Self {
        self.config.sourcemap = enabled;
        self
    }

    /// Requests removal of prior output before building.
    pub fn clean(mut self, enabled: bool) -> Self {
        self.config.clean = enabled;
        self
    }

    /// Requests minified output.
    pub fn minify(mut self, enabled: bool) -> Self {
        self.config.minify = enabled;
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `dist`
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.out_dir = PathBuf::from(path.as_ref());
        self
    }

    /// Builds and validates the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](super::Error::InvalidConfig) if the
    /// result fails [`BundleConfig::validate`].
    pub fn build(self) -> Result<BundleConfig> {
        let mut config = self.config;
        if let Some(formats) = self.formats {
            config.format = formats;
        }

        config.validate()?;
        Ok(config)
    }
}
