//! Fixture responder variants.
//!
//! Each variant performs exactly one verification action per request
//! against the deployed artifact: serve a binary asset unmodified,
//! compute a value through the local module graph, render markup via
//! the pinned dependency, or snapshot the filesystem and environment.
//! Variants are stateless; every invocation is a fresh, single-shot
//! read of the deployed state.

use std::fs;

use crate::calc;
use crate::config::FixtureConfig;
use crate::env_snapshot;
use crate::error::FixtureError;
use crate::inventory;
use crate::render;

/// Successful fixture output before failure reporting is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePayload {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl ResponsePayload {
    fn text(body: String, content_type: &'static str) -> Self {
        Self {
            body: body.into_bytes(),
            content_type,
        }
    }

    fn binary(body: Vec<u8>) -> Self {
        Self {
            body,
            content_type: "application/octet-stream",
        }
    }
}

/// How the diagnostic snapshot answers.
///
/// The corpus historically had the structured response shadowed by a
/// hardcoded binary override; here both behaviors are first-class and
/// selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMode {
    /// JSON payload with the asset inventory and filtered environment.
    Structured,
    /// Serve the configured override asset for manual inspection.
    StaticAsset,
}

/// One deployment-fidelity verification scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureVariant {
    /// Serve a named binary asset byte-for-byte.
    BinaryPassthrough { asset: String },
    /// Compute `sum: a+b` from the local module graph and operands
    /// resource.
    ComputedValue,
    /// Render the configured markup through the pinned renderer.
    RenderedOutput,
    /// Report deployed filesystem and environment state.
    DiagnosticSnapshot { mode: SnapshotMode },
}

impl FixtureVariant {
    /// Perform this variant's verification action once.
    ///
    /// Input/IO failures come back as `Err` for the failure reporter
    /// to turn into response text; nothing here panics on a missing
    /// or malformed asset.
    pub fn respond(&self, config: &FixtureConfig) -> Result<ResponsePayload, FixtureError> {
        match self {
            FixtureVariant::BinaryPassthrough { asset } => {
                Ok(ResponsePayload::binary(read_asset(config, asset)?))
            }
            FixtureVariant::ComputedValue => {
                let (a, b) = load_operands(config)?;
                let body = format!("sum: {}", calc::add(a, b));
                Ok(ResponsePayload::text(body, "text/plain"))
            }
            FixtureVariant::RenderedOutput => {
                let body = render::render_markup(&config.markup_source);
                Ok(ResponsePayload::text(body, "text/html"))
            }
            FixtureVariant::DiagnosticSnapshot { mode } => match mode {
                SnapshotMode::Structured => Ok(ResponsePayload::text(
                    structured_snapshot(config),
                    "application/json",
                )),
                SnapshotMode::StaticAsset => Ok(ResponsePayload::binary(read_asset(
                    config,
                    &config.override_asset,
                )?)),
            },
        }
    }
}

fn read_asset(config: &FixtureConfig, name: &str) -> Result<Vec<u8>, FixtureError> {
    let path = config.asset_path(name);
    fs::read(&path).map_err(|err| FixtureError::from_read(&path, &err))
}

/// Name of the structured-data resource holding the operand pair.
pub const OPERANDS_RESOURCE: &str = "operands.json";

fn load_operands(config: &FixtureConfig) -> Result<(i64, i64), FixtureError> {
    let path = config.asset_path(OPERANDS_RESOURCE);
    let raw = fs::read_to_string(&path).map_err(|err| FixtureError::from_read(&path, &err))?;

    let values: Vec<i64> =
        serde_json::from_str(&raw).map_err(|err| FixtureError::InvalidOperands {
            reason: err.to_string(),
        })?;

    match values[..] {
        [a, b] => Ok((a, b)),
        _ => Err(FixtureError::InvalidOperands {
            reason: format!("expected exactly two numbers, found {}", values.len()),
        }),
    }
}

fn structured_snapshot(config: &FixtureConfig) -> String {
    let assets = inventory::collect_assets(&config.asset_root);
    let env_vars = env_snapshot::capture(&config.reserved_env_prefix);
    serde_json::json!({
        "assets": assets,
        "env_vars": env_vars,
    })
    .to_string()
}
