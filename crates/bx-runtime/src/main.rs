//! # Bizdex Runtime
//!
//! Loads configuration, builds the record store, rebuilds every index from
//! it and logs a summary of the resulting state.
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RUST_LOG` | log filter, default `info` |
//! | `BX_SEED_PATH` | JSON seed document to load |
//! | `BX_TOP_REFERRERS` | top-referrer limit |
//! | `BX_MOVING_AVERAGE_WINDOW` | order-activity window |
//! | `BX_PRICE_MIN` / `BX_PRICE_MAX` | default product search bounds |

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bx_runtime::{
    rebuild, InMemoryRecordStore, IndexState, IntakeService, RuntimeConfig,
};

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

fn load_store(config: &RuntimeConfig) -> Result<InMemoryRecordStore> {
    match &config.store.seed_path {
        Some(path) => InMemoryRecordStore::from_seed_file(path)
            .with_context(|| format!("failed to load seed data from {}", path.display())),
        None => {
            info!("No seed file configured, starting with an empty store");
            Ok(InMemoryRecordStore::new())
        }
    }
}

fn main() -> Result<()> {
    init_tracing()?;

    let config = RuntimeConfig::from_env();
    config.validate().context("invalid runtime configuration")?;

    let store = Arc::new(load_store(&config)?);
    let state = IndexState::new();
    let report = rebuild(&*store, &state).context("startup rebuild failed")?;
    info!(?report, "Startup rebuild complete");

    let service = IntakeService::new(store, state, config);

    let stats = service.dashboard().context("failed to compute dashboard")?;
    info!(
        leads = stats.total_leads,
        claims = stats.total_claims,
        customers = stats.total_customers,
        orders = stats.total_orders,
        high_risk_claims = stats.high_risk_claims,
        avg_fraud_score = stats.avg_fraud_score,
        queue_size = stats.queue_size,
        "Dashboard"
    );

    if let Ok(lead) = service.peek_lead() {
        info!(name = %lead.name, score = lead.score, "Most urgent lead");
    }
    for referrer in service.top_referrers() {
        info!(customer = %referrer.vertex, referrals = referrer.degree, "Top referrer");
    }

    Ok(())
}
