//! Asset inventory builder.
//!
//! Walks the deployed asset tree lazily and reports every regular file
//! with its exact byte size at traversal time. The walk runs on every
//! request, so it must stay finite: symlink cycles and unreadable
//! entries are skipped, never escalated, and a missing root is an
//! empty inventory rather than an error.

use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;
use walkdir::WalkDir;

/// One regular file reachable from the inventory root.
///
/// Inventories are compared as sets by the external verifier, so
/// ordering carries no meaning; uniqueness is by `relative_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub relative_path: String,
    pub size_bytes: u64,
}

/// Lazy walk over the files under a root path.
pub struct AssetWalk {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for AssetWalk {
    type Item = AssetEntry;

    fn next(&mut self) -> Option<AssetEntry> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    // Symlink loops and permission failures land here.
                    // A missing root does too, which makes an absent
                    // tree an empty inventory.
                    warn!("skipping inventory entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let size_bytes = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    warn!("skipping unreadable file {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            return Some(AssetEntry {
                relative_path: portable_path(relative),
                size_bytes,
            });
        }
    }
}

/// Start a lazy recursive walk rooted at `root`.
///
/// Symlinks are followed so that linked assets are inventoried; the
/// walker's ancestor check turns a link cycle into a skippable entry
/// instead of an unbounded descent.
pub fn walk_assets<P: AsRef<Path>>(root: P) -> AssetWalk {
    let root = root.as_ref().to_path_buf();
    let inner = WalkDir::new(&root).follow_links(true).into_iter();
    AssetWalk { root, inner }
}

/// Collect the full inventory eagerly, for serialization.
pub fn collect_assets<P: AsRef<Path>>(root: P) -> Vec<AssetEntry> {
    walk_assets(root).collect()
}

fn portable_path(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
