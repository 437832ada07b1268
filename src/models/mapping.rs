use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Child directory holding the static HTML/CSS rendition of a component.
pub const HTML_SPLIT_CHILD: &str = "html_css";

/// Child directory holding the React rendition of a component.
pub const COMPONENT_SPLIT_CHILD: &str = "react_component";

/// How a destination consumes a source subdirectory that carries the
/// `html_css` / `react_component` split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationRole {
    /// Receives the `html_css` child's contents when the split is present.
    Html,
    /// Receives the `react_component` child's contents when the split is present.
    Component,
    /// Always receives the whole subdirectory.
    #[default]
    Verbatim,
}

impl DestinationRole {
    /// Name of the split child this role extracts, if any.
    pub fn split_child(self) -> Option<&'static str> {
        match self {
            DestinationRole::Html => Some(HTML_SPLIT_CHILD),
            DestinationRole::Component => Some(COMPONENT_SPLIT_CHILD),
            DestinationRole::Verbatim => None,
        }
    }
}

/// A sandbox directory that receives copies, tagged with its routing role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub path: PathBuf,
    #[serde(default)]
    pub role: DestinationRole,
}

impl Destination {
    pub fn new(path: impl Into<PathBuf>, role: DestinationRole) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }

    pub fn verbatim(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DestinationRole::Verbatim)
    }
}

/// One source root and the sandbox roots it mirrors into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathMapping {
    pub source: PathBuf,
    pub destinations: Vec<Destination>,
}

impl PathMapping {
    pub fn new(source: impl Into<PathBuf>, destinations: Vec<Destination>) -> Self {
        Self {
            source: source.into(),
            destinations,
        }
    }
}

/// Which asset variant a run mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    Tests,
    VFinals,
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tests" => Ok(SyncMode::Tests),
            "vfinals" => Ok(SyncMode::VFinals),
            other => Err(format!(
                "unknown sync mode '{}', expected 'tests' or 'vfinals'",
                other
            )),
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMode::Tests => f.write_str("tests"),
            SyncMode::VFinals => f.write_str("vfinals"),
        }
    }
}
