//! Planned output artifacts.

use std::path::PathBuf;

use serde::Serialize;

use super::{BundleConfig, OutputFormat};

/// Kind of file a bundler emits for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Bundled code
    Code,
    /// Source map for a code artifact
    SourceMap,
    /// Type declarations
    Declarations,
}

/// A file the config asks the bundler to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    /// Entry name the file belongs to.
    pub entry: String,
    /// What the file contains.
    pub kind: ArtifactKind,
    /// Format of the code this file belongs to; `None` for declarations.
    pub format: Option<OutputFormat>,
    /// Destination under the output directory.
    pub path: PathBuf,
}

impl BundleConfig {
    /// Lists the files a bundler would emit for this config.
    ///
    /// Entries are visited in name order. Per entry: for each format the
    /// code file then its source map (when `sourcemap`), then one
    /// `<name>.d.ts` (when `dts`).
    pub fn artifacts(&self) -> Vec<PlannedArtifact> {
        let mut artifacts = Vec::new();

        for name in self.entry.keys() {
            for &format in &self.format {
                let code = self
                    .out_dir
                    .join(format!("{name}.{}", format.extension()));

                let map = self.sourcemap.then(|| {
                    let mut map = code.clone().into_os_string();
                    map.push(".map");
                    PathBuf::from(map)
                });

                artifacts.push(PlannedArtifact {
                    entry: name.clone(),
                    kind: ArtifactKind::Code,
                    format: Some(format),
                    path: code,
                });
                if let Some(path) = map {
                    artifacts.push(PlannedArtifact {
                        entry: name.clone(),
                        kind: ArtifactKind::SourceMap,
                        format: Some(format),
                        path,
                    });
                }
            }

            if self.dts {
                artifacts.push(PlannedArtifact {
                    entry: name.clone(),
                    kind: ArtifactKind::Declarations,
                    format: None,
                    path: self.out_dir.join(format!("{name}.d.ts")),
                });
            }
        }

        artifacts
    }
}
