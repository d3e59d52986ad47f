//! Configuration for deployed fixture responders.
//!
//! Paths are anchored to the crate's own location rather than the
//! process working directory: deployment repackaging may launch the
//! fixture from anywhere, and relative-asset resolution surviving that
//! is one of the properties the corpus exists to prove.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location for deployable fixture assets.
pub const DEFAULT_ASSET_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Environment variable prefix reserved for the hosting platform.
pub const DEFAULT_RESERVED_PREFIX: &str = "DEPLOY_";

/// Markup source whose rendered form the verifier compares byte-for-byte.
pub const DEFAULT_MARKUP_SOURCE: &str = "# Hello World!";

/// Binary asset served by the passthrough and static-snapshot fixtures.
pub const DEFAULT_BINARY_ASSET: &str = "computer_screen_programming.png";

/// Complete fixture configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Root directory holding the fixture's deployable assets.
    pub asset_root: PathBuf,
    /// Env vars starting with this prefix are dropped from snapshots.
    pub reserved_env_prefix: String,
    /// Markup input for the rendered-output fixture.
    pub markup_source: String,
    /// Asset name served by the static-snapshot override.
    pub override_asset: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            reserved_env_prefix: DEFAULT_RESERVED_PREFIX.to_string(),
            markup_source: DEFAULT_MARKUP_SOURCE.to_string(),
            override_asset: DEFAULT_BINARY_ASSET.to_string(),
        }
    }
}

impl FixtureConfig {
    /// Load configuration from a JSON file, falling back to defaults
    /// for any omitted field.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve an asset name against the configured root.
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_root.join(name)
    }
}
