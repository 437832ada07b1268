use crate::models::{DestinationRole, PathMapping, COMPONENT_SPLIT_CHILD, HTML_SPLIT_CHILD};
use crate::utils::{copy_dir_recursive, list_subdirectories};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Mirror every mapping's missing subdirectories into its destinations.
///
/// Mappings are processed in declaration order. All mapping paths resolve
/// against `root`. A missing source root is reported and skipped; any
/// other filesystem failure aborts the run. Subdirectories already present
/// at a destination are never touched.
pub fn sync_mappings(root: &Path, mappings: &[PathMapping]) -> Result<SyncReport> {
    info!("Starting directory sync for {} mappings", mappings.len());

    let mut report = SyncReport::empty();

    for mapping in mappings {
        let source_root = root.join(&mapping.source);

        if !source_root.exists() {
            warn!("Source path {} does not exist", source_root.display());
            report.missing_sources.push(source_root);
            continue;
        }

        let source_dirs = list_subdirectories(&source_root)?;

        for destination in &mapping.destinations {
            let dest_root = root.join(&destination.path);

            fs::create_dir_all(&dest_root).with_context(|| {
                format!("Failed to create destination root: {:?}", dest_root)
            })?;

            let dest_dirs: HashSet<OsString> =
                list_subdirectories(&dest_root)?.into_iter().collect();

            for dir_name in &source_dirs {
                if dest_dirs.contains(dir_name) {
                    debug!(
                        "Skipped copying {:?} to {}: already present",
                        dir_name,
                        dest_root.display()
                    );
                    report.skipped += 1;
                    continue;
                }

                let source_dir = source_root.join(dir_name);
                let copy_root = copy_root_for(&source_dir, destination.role);
                let dest_dir = dest_root.join(dir_name);

                info!("Copying {} to {}", copy_root.display(), dest_dir.display());
                copy_dir_recursive(&copy_root, &dest_dir)?;

                report.copied.push(CopiedDir {
                    source: copy_root,
                    destination: dest_dir,
                });
            }
        }
    }

    info!(
        "Directory sync completed. Copied: {}, Skipped: {}, Missing sources: {}",
        report.copied.len(),
        report.skipped,
        report.missing_sources.len()
    );

    Ok(report)
}

/// Which tree a destination receives for one source subdirectory.
///
/// Split-role destinations take their matching child when the subdirectory
/// carries both split children; otherwise, and always for verbatim
/// destinations, the whole subdirectory is copied.
fn copy_root_for(source_dir: &Path, role: DestinationRole) -> PathBuf {
    let Some(child) = role.split_child() else {
        return source_dir.to_path_buf();
    };

    if has_split_layout(source_dir) {
        source_dir.join(child)
    } else {
        source_dir.to_path_buf()
    }
}

/// Whether a source subdirectory carries both split children.
fn has_split_layout(source_dir: &Path) -> bool {
    source_dir.join(HTML_SPLIT_CHILD).exists()
        && source_dir.join(COMPONENT_SPLIT_CHILD).exists()
}

/// Outcome of a mirror run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub copied: Vec<CopiedDir>,
    pub skipped: usize,
    pub missing_sources: Vec<PathBuf>,
}

impl SyncReport {
    pub fn empty() -> Self {
        Self {
            copied: Vec::new(),
            skipped: 0,
            missing_sources: Vec::new(),
        }
    }

    pub fn total_processed(&self) -> usize {
        self.copied.len() + self.skipped
    }
}

/// One performed copy.
#[derive(Debug, Clone)]
pub struct CopiedDir {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn verbatim_role_always_takes_the_whole_subdirectory() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("navbar");
        fs::create_dir_all(subdir.join(HTML_SPLIT_CHILD)).unwrap();
        fs::create_dir_all(subdir.join(COMPONENT_SPLIT_CHILD)).unwrap();

        assert_eq!(copy_root_for(&subdir, DestinationRole::Verbatim), subdir);
    }

    #[test]
    fn split_role_takes_its_child_when_both_are_present() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("navbar");
        fs::create_dir_all(subdir.join(HTML_SPLIT_CHILD)).unwrap();
        fs::create_dir_all(subdir.join(COMPONENT_SPLIT_CHILD)).unwrap();

        assert_eq!(
            copy_root_for(&subdir, DestinationRole::Html),
            subdir.join(HTML_SPLIT_CHILD)
        );
        assert_eq!(
            copy_root_for(&subdir, DestinationRole::Component),
            subdir.join(COMPONENT_SPLIT_CHILD)
        );
    }

    #[test]
    fn split_role_falls_back_when_a_child_is_missing() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("navbar");
        fs::create_dir_all(subdir.join(HTML_SPLIT_CHILD)).unwrap();

        assert_eq!(copy_root_for(&subdir, DestinationRole::Html), subdir);
        assert_eq!(copy_root_for(&subdir, DestinationRole::Component), subdir);
    }
}
