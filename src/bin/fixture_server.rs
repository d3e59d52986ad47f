use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use deploy_fixtures::http::{run_fixture_server, FixtureState};
use deploy_fixtures::inventory;
use deploy_fixtures::report;
use deploy_fixtures::{FixtureConfig, FixtureVariant, Outcome, SnapshotMode};

#[derive(Parser, Debug)]
#[command(
    name = "fixture-server",
    about = "Deployment-fidelity fixture corpus: serve or check one verification scenario"
)]
struct Cli {
    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the asset root directory
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Override the reserved environment prefix
    #[arg(long)]
    reserved_prefix: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve one fixture variant over HTTP until interrupted.
    Serve(ServeArgs),
    /// Run one fixture variant once and print the response report.
    Check(CheckArgs),
    /// Print the asset inventory for the configured root as JSON.
    Inventory,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, value_enum)]
    variant: VariantKind,
    #[arg(long, default_value = "127.0.0.1:8000")]
    listen: SocketAddr,
    /// Asset name for the binary-passthrough variant
    #[arg(long)]
    asset: Option<String>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[arg(long, value_enum)]
    variant: VariantKind,
    /// Asset name for the binary-passthrough variant
    #[arg(long)]
    asset: Option<String>,
}

/// Selectable verification scenarios.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantKind {
    /// Serve a binary asset byte-for-byte.
    Binary,
    /// Compute a sum through the local module graph.
    Computed,
    /// Render markup through the pinned dependency.
    Rendered,
    /// Structured filesystem + environment snapshot.
    Snapshot,
    /// Static-asset override of the snapshot fixture.
    SnapshotStatic,
}

impl VariantKind {
    fn into_variant(self, config: &FixtureConfig, asset: Option<String>) -> FixtureVariant {
        match self {
            VariantKind::Binary => FixtureVariant::BinaryPassthrough {
                asset: asset.unwrap_or_else(|| config.override_asset.clone()),
            },
            VariantKind::Computed => FixtureVariant::ComputedValue,
            VariantKind::Rendered => FixtureVariant::RenderedOutput,
            VariantKind::Snapshot => FixtureVariant::DiagnosticSnapshot {
                mode: SnapshotMode::Structured,
            },
            VariantKind::SnapshotStatic => FixtureVariant::DiagnosticSnapshot {
                mode: SnapshotMode::StaticAsset,
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("fixture-server error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Serve(args) => run_serve(config, args),
        Command::Check(args) => run_check(config, args),
        Command::Inventory => run_inventory(&config),
    }
}

fn load_config(cli: &Cli) -> Result<FixtureConfig> {
    let mut config = match &cli.config {
        Some(path) => FixtureConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FixtureConfig::default(),
    };
    if let Some(dir) = &cli.assets_dir {
        config.asset_root = dir.clone();
    }
    if let Some(prefix) = &cli.reserved_prefix {
        config.reserved_env_prefix = prefix.clone();
    }
    Ok(config)
}

fn run_serve(config: FixtureConfig, args: ServeArgs) -> Result<ExitCode> {
    let variant = args.variant.into_variant(&config, args.asset);
    let state = FixtureState::new(variant, config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime for fixture server")?;

    runtime.block_on(async move {
        tokio::select! {
            result = run_fixture_server(state, args.listen) => result,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })?;

    Ok(ExitCode::SUCCESS)
}

fn run_check(config: FixtureConfig, args: CheckArgs) -> Result<ExitCode> {
    let variant = args.variant.into_variant(&config, args.asset);
    let response = report::finalize(variant.respond(&config));

    let outcome = match response.outcome {
        Outcome::Success => "success",
        Outcome::Failure => "failure",
    };
    let json = serde_json::json!({
        "outcome": outcome,
        "content_type": response.content_type,
        "body_bytes": response.body.len(),
        "body": String::from_utf8_lossy(&response.body),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);

    if response.is_failure() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_inventory(config: &FixtureConfig) -> Result<ExitCode> {
    let entries = inventory::collect_assets(&config.asset_root);
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(ExitCode::SUCCESS)
}
