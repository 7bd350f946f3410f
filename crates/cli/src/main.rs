use anyhow::Context;
use clap::{Parser, Subcommand};
use praxos_core::catalog::{CatalogProvider, DemoCatalog, JsonCatalog};
use praxos_core::domain::asset::AssetRecord;
use praxos_core::domain::contract::RiskRequest;
use praxos_core::domain::preferences::{RiskTolerance, Timeframe, UserPreferences};
use praxos_core::engine::{EngineOptions, RecommendationEngine};
use praxos_core::risk::{RiskInput, RiskProfiler};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Debug, Parser)]
#[command(name = "praxos")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a vault catalog against investment preferences.
    Recommend {
        /// JSON catalog (array of vaults or `{"vaults": [...]}`), e.g. crates/cli/demos/catalog.json.
        /// Defaults to the built-in demo vaults.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// short, medium or long.
        #[arg(long, default_value = "medium")]
        timeframe: Timeframe,

        /// 1 (conservative) ..= 5 (aggressive).
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        risk_tolerance: u8,

        #[arg(long, default_value_t = 0.0)]
        amount: f64,

        /// Minimum expected yield in percent.
        #[arg(long)]
        min_yield: Option<f64>,

        /// Preferred asset type; may be repeated.
        #[arg(long = "prefer")]
        preferred_asset_types: Vec<String>,

        /// Maximum number of recommendations. Defaults to PRAXOS_DEFAULT_LIMIT or 5.
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Simulate the risk signature of a single tokenized asset.
    Simulate {
        #[arg(long)]
        address: String,

        #[arg(long)]
        asset_type: String,

        /// Annual yield in basis-points-like units (500 = 5%).
        #[arg(long)]
        annual_yield_bps: i64,

        /// Unix seconds; 0 means no fixed maturity.
        #[arg(long, default_value_t = 0)]
        maturity_timestamp: i64,

        #[arg(long)]
        risk_tier: i32,

        /// Unix seconds to evaluate at. Defaults to now.
        #[arg(long)]
        now: Option<i64>,

        #[arg(long)]
        json: bool,
    },

    /// Simulate every asset in a JSON list of risk requests and print the cached signatures.
    Profile {
        /// JSON array of risk requests, e.g. crates/cli/demos/tokens.json.
        #[arg(long)]
        tokens: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = praxos_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(args.command) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "praxos command failed");
        return Err(err);
    }

    Ok(())
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Recommend {
            catalog,
            timeframe,
            risk_tolerance,
            amount,
            min_yield,
            preferred_asset_types,
            limit,
            json,
        } => {
            let risk_tolerance =
                RiskTolerance::try_from(risk_tolerance).map_err(anyhow::Error::msg)?;
            let mut prefs = UserPreferences::new(timeframe, risk_tolerance, amount);
            prefs.min_yield = min_yield;
            if !preferred_asset_types.is_empty() {
                prefs.preferred_asset_types = Some(preferred_asset_types);
            }

            let records = match catalog.as_deref() {
                Some(path) => {
                    let raw = read_file(path)?;
                    load_catalog(&JsonCatalog::new(raw))?
                }
                None => load_catalog(&DemoCatalog)?,
            };

            let mut engine = RecommendationEngine::with_options(EngineOptions::from_env());
            engine.register_all(records);

            let recs = match limit {
                Some(limit) => engine.recommend(&prefs, limit),
                None => engine.recommend_default(&prefs),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&recs)?);
            } else {
                print!("{}", render::recommendations(&recs));
            }
        }

        Command::Simulate {
            address,
            asset_type,
            annual_yield_bps,
            maturity_timestamp,
            risk_tier,
            now,
            json,
        } => {
            let mut profiler = RiskProfiler::new();
            let signature = profiler.simulate_risk(RiskInput {
                asset_address: address,
                asset_type,
                annual_yield_bps,
                maturity_timestamp,
                risk_tier,
                now_timestamp: now,
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&signature)?);
            } else {
                print!("{}", render::signature(&signature));
            }
        }

        Command::Profile { tokens, json } => {
            let raw = read_file(&tokens)?;
            let requests = serde_json::from_str::<Vec<RiskRequest>>(&raw).with_context(|| {
                format!("{} is not a JSON array of risk requests", tokens.display())
            })?;

            let mut profiler = RiskProfiler::new();
            for request in requests {
                profiler.simulate_risk(request.into());
            }
            tracing::info!(signatures = profiler.len(), "profiled assets");

            let signatures = profiler.list_signatures();
            if json {
                println!("{}", serde_json::to_string_pretty(signatures)?);
            } else {
                for signature in signatures {
                    print!("{}", render::signature(signature));
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(provider: &dyn CatalogProvider) -> anyhow::Result<Vec<AssetRecord>> {
    let records = provider
        .load_assets()
        .with_context(|| format!("failed to load {} catalog", provider.provider_name()))?;
    tracing::info!(
        provider = provider.provider_name(),
        vaults = records.len(),
        "loaded vault catalog"
    );
    Ok(records)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn init_sentry(settings: &praxos_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
