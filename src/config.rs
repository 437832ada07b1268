use crate::models::{Destination, DestinationRole, PathMapping, SyncMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a mapping table from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config file declares no mappings: {path:?}")]
    Empty { path: PathBuf },
}

/// The full two-mode path table driving a run.
///
/// The default reproduces the project layout: component, design, and
/// script sources in `Tests` / `V_Finals` variants, mirrored into the
/// HTML, NextJS, and Python sandboxes. A TOML file with the same shape
/// can replace it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default)]
    pub tests: Vec<PathMapping>,
    #[serde(default)]
    pub vfinals: Vec<PathMapping>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            tests: vec![
                PathMapping::new(
                    "Components/Tests",
                    vec![
                        Destination::new(
                            "Sandbox_html_css/assets/pages/tests",
                            DestinationRole::Html,
                        ),
                        Destination::new(
                            "Sandbox_nextjs/ui/components/tests",
                            DestinationRole::Component,
                        ),
                    ],
                ),
                PathMapping::new(
                    "Designs/Tests",
                    vec![Destination::verbatim("Sandbox_nextjs/ui/design/tests")],
                ),
                PathMapping::new(
                    "Scripts/Tests",
                    vec![Destination::verbatim("Sandbox_python/scripts_tests")],
                ),
            ],
            vfinals: vec![
                PathMapping::new(
                    "Components/V_Finals",
                    vec![
                        Destination::new(
                            "Sandbox_html_css/assets/pages/vFinals",
                            DestinationRole::Html,
                        ),
                        Destination::new(
                            "Sandbox_nextjs/ui/components/vFinals",
                            DestinationRole::Component,
                        ),
                    ],
                ),
                PathMapping::new(
                    "Designs/V_Finals",
                    vec![Destination::verbatim("Sandbox_nextjs/ui/design/vFinals")],
                ),
                PathMapping::new(
                    "Scripts/V_Finals",
                    vec![Destination::verbatim("Sandbox_python/scripts_vFinals")],
                ),
            ],
        }
    }
}

impl MirrorConfig {
    /// Load a mapping table from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: MirrorConfig =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.tests.is_empty() && config.vfinals.is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(config)
    }

    /// The mapping table for one invocation mode.
    pub fn mappings_for(&self, mode: SyncMode) -> &[PathMapping] {
        match mode {
            SyncMode::Tests => &self.tests,
            SyncMode::VFinals => &self.vfinals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_cover_both_modes() {
        let config = MirrorConfig::default();

        assert_eq!(config.tests.len(), 3);
        assert_eq!(config.vfinals.len(), 3);

        let components = &config.tests[0];
        assert_eq!(components.source, PathBuf::from("Components/Tests"));
        assert_eq!(components.destinations[0].role, DestinationRole::Html);
        assert_eq!(components.destinations[1].role, DestinationRole::Component);

        for mapping in config.tests.iter().skip(1) {
            for destination in &mapping.destinations {
                assert_eq!(destination.role, DestinationRole::Verbatim);
            }
        }
    }

    #[test]
    fn mappings_for_selects_the_mode_table() {
        let config = MirrorConfig::default();

        assert_eq!(
            config.mappings_for(SyncMode::Tests)[0].source,
            PathBuf::from("Components/Tests")
        );
        assert_eq!(
            config.mappings_for(SyncMode::VFinals)[0].source,
            PathBuf::from("Components/V_Finals")
        );
    }

    #[test]
    fn parses_mapping_table_from_toml() {
        let raw = r#"
            [[tests]]
            source = "Components/Tests"
            destinations = [
                { path = "Sandbox_html_css/assets/pages/tests", role = "html" },
                { path = "Sandbox_nextjs/ui/components/tests", role = "component" },
            ]

            [[tests]]
            source = "Designs/Tests"
            destinations = [{ path = "Sandbox_nextjs/ui/design/tests" }]
        "#;

        let config: MirrorConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.tests.len(), 2);
        assert!(config.vfinals.is_empty());
        assert_eq!(config.tests[0].destinations[0].role, DestinationRole::Html);
        // role is optional and defaults to verbatim
        assert_eq!(
            config.tests[1].destinations[0].role,
            DestinationRole::Verbatim
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let raw = r#"
            [[tests]]
            source = "Components/Tests"
            destinations = [{ path = "Sandbox", role = "nextjs" }]
        "#;

        assert!(toml::from_str::<MirrorConfig>(raw).is_err());
    }

    #[test]
    fn from_file_rejects_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.toml");
        fs::write(&path, "").unwrap();

        let err = MirrorConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = MirrorConfig::from_file("no/such/mappings.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
