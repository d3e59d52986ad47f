// Error types for deployment fixture responders.
//
// Failures here are reported to a remote verifier as plain response
// text, so every variant carries a human-readable message and nothing
// else: no backtraces, no internal state.

use std::fmt;
use std::io;
use std::path::Path;

/// Failure raised while producing a fixture's verification result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// A referenced asset file or directory does not exist.
    MissingAsset { path: String },

    /// An asset exists but could not be read in full.
    AssetRead { path: String, details: String },

    /// The operands resource is present but not a usable number pair.
    InvalidOperands { reason: String },
}

impl FixtureError {
    /// Classify an I/O failure for the given asset path.
    ///
    /// `NotFound` becomes [`FixtureError::MissingAsset`]; everything
    /// else (permissions, truncation) is an [`FixtureError::AssetRead`].
    pub fn from_read(path: &Path, err: &io::Error) -> Self {
        let path = path.display().to_string();
        if err.kind() == io::ErrorKind::NotFound {
            FixtureError::MissingAsset { path }
        } else {
            FixtureError::AssetRead {
                path,
                details: err.to_string(),
            }
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::MissingAsset { path } => {
                write!(f, "asset not found: {}", path)
            }
            FixtureError::AssetRead { path, details } => {
                write!(f, "failed to read asset {}: {}", path, details)
            }
            FixtureError::InvalidOperands { reason } => {
                write!(f, "invalid operands resource: {}", reason)
            }
        }
    }
}

impl std::error::Error for FixtureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_missing_asset() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = FixtureError::from_read(Path::new("assets/missing.png"), &io_err);
        assert_eq!(
            err,
            FixtureError::MissingAsset {
                path: "assets/missing.png".to_string()
            }
        );
        assert!(err.to_string().contains("asset not found"));
    }

    #[test]
    fn other_io_errors_map_to_asset_read() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = FixtureError::from_read(Path::new("assets/locked.png"), &io_err);
        match &err {
            FixtureError::AssetRead { path, details } => {
                assert_eq!(path, "assets/locked.png");
                assert!(details.contains("denied"));
            }
            other => panic!("expected AssetRead, got {other:?}"),
        }
    }

    #[test]
    fn messages_are_plain_text() {
        let err = FixtureError::InvalidOperands {
            reason: "expected exactly two numbers".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid operands resource: expected exactly two numbers"
        );
    }
}
