//! Bundle configuration types.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Error, Result};

static ENTRY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-/]+$").expect("entry name pattern is valid"));

/// Output language-feature level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// ECMAScript 5
    Es5,
    /// ECMAScript 2015
    Es2015,
    /// ECMAScript 2016
    Es2016,
    /// ECMAScript 2017
    Es2017,
    /// ECMAScript 2018
    Es2018,
    /// ECMAScript 2019
    Es2019,
    /// ECMAScript 2020
    Es2020,
    /// ECMAScript 2021
    Es2021,
    /// ECMAScript 2022
    Es2022,
    /// Latest features the bundler supports
    #[default]
    EsNext,
}

impl Target {
    /// Returns the tag as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es5 => "es5",
            Self::Es2015 => "es2015",
            Self::Es2016 => "es2016",
            Self::Es2017 => "es2017",
            Self::Es2018 => "es2018",
            Self::Es2019 => "es2019",
            Self::Es2020 => "es2020",
            Self::Es2021 => "es2021",
            Self::Es2022 => "es2022",
            Self::EsNext => "esnext",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Module-wrapping convention of an emitted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES modules
    #[default]
    Esm,
    /// CommonJS
    Cjs,
    /// Immediately-invoked function expression, for script tags
    Iife,
}

impl OutputFormat {
    /// File extension of the code artifact, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Esm => "mjs",
            Self::Cjs => "cjs",
            Self::Iife => "global.js",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Esm => "esm",
            Self::Cjs => "cjs",
            Self::Iife => "iife",
        })
    }
}

/// Build options for packaging named entry modules.
///
/// Purely declarative: nothing here runs a build. Construct with
/// [`BundleConfigBuilder`](super::BundleConfigBuilder) or load with
/// [`load_config`](super::load_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BundleConfig {
    /// Output artifact name mapped to the source module it is built from.
    pub entry: BTreeMap<String, PathBuf>,

    /// Output language-feature level.
    ///
    /// Default: `esnext`
    pub target: Target,

    /// Module formats to emit. Accepts a single string or a list.
    ///
    /// Default: `["esm"]`
    #[serde(deserialize_with = "one_or_many")]
    pub format: Vec<OutputFormat>,

    /// Emit a type declaration file per entry.
    pub dts: bool,

    /// Emit a source map per code artifact.
    pub sourcemap: bool,

    /// Remove the output directory before building.
    pub clean: bool,

    /// Minify emitted code.
    pub minify: bool,

    /// Directory artifacts are written to.
    ///
    /// Default: `dist`
    pub out_dir: PathBuf,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry: BTreeMap::new(),
            target: Target::default(),
            format: vec![OutputFormat::default()],
            dts: false,
            sourcemap: false,
            clean: false,
            minify: false,
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl BundleConfig {
    /// Preset for the world-modules package: `mud.config` built from
    /// `mud.config.ts` as minified ESM with declarations and source maps.
    pub fn world_modules() -> Self {
        Self {
            entry: BTreeMap::from([("mud.config".to_string(), PathBuf::from("mud.config.ts"))]),
            target: Target::EsNext,
            format: vec![OutputFormat::Esm],
            dts: true,
            sourcemap: true,
            clean: true,
            minify: true,
            ..Self::default()
        }
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Checks the config for values no bundler could act on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when:
    /// - there are no entries
    /// - an entry name is empty, absolute, contains `..`, or has characters
    ///   outside `[A-Za-z0-9_.-/]`
    /// - an entry source path is empty
    /// - no format is listed, or a format is listed twice
    /// - `out-dir` is empty, has a `..` component, or names no directory
    ///   of its own (`.`, `/`)
    pub fn validate(&self) -> Result<()> {
        if self.entry.is_empty() {
            return Err(invalid("at least one entry is required"));
        }

        for (name, source) in &self.entry {
            if !ENTRY_NAME.is_match(name) {
                return Err(invalid(format!(
                    "entry name {name:?} must match [A-Za-z0-9_.-/]+"
                )));
            }
            if name.starts_with('/') || name.split('/').any(|part| part == "..") {
                return Err(invalid(format!(
                    "entry name {name:?} must stay inside the output directory"
                )));
            }
            if source.as_os_str().is_empty() {
                return Err(invalid(format!("entry {name:?} has an empty source path")));
            }
        }

        if self.format.is_empty() {
            return Err(invalid("at least one format is required"));
        }
        let mut seen = HashSet::new();
        for format in &self.format {
            if !seen.insert(format) {
                return Err(invalid(format!("format {format} is listed more than once")));
            }
        }

        let mut components = self.out_dir.components();
        if components.clone().any(|part| part == Component::ParentDir)
            || !components.any(|part| matches!(part, Component::Normal(_)))
        {
            return Err(invalid(format!(
                "out-dir {:?} must name a dedicated output directory",
                self.out_dir
            )));
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidConfig(reason.into())
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<OutputFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(OutputFormat),
        Many(Vec<OutputFormat>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(format) => vec![format],
        OneOrMany::Many(formats) => formats,
    })
}
