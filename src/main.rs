//! `alias-resolve`: resolves the alias index once and reports where it came from.
//!
//! Exit codes: `0` resolved, `2` every tier exhausted (alias features disabled).

use std::sync::Arc;

use mimalloc::MiMalloc;

use alias::config::Config;
use alias::hashing::short_hex;
use alias::resolver::{AliasResolver, Promotion, ResolveError};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const EXIT_EXHAUSTED: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        cache_dir = %config.cache_dir.display(),
        source_root = %config.source_root.display(),
        binary_write_back = config.binary_write_back,
        "Alias resolver starting"
    );

    let resolver = Arc::new(AliasResolver::from_config(&config));

    match resolver.spawn_resolve().await? {
        Ok(resolution) => {
            let promotion = match &resolution.promotion {
                Promotion::NotRequired => "not required".to_string(),
                Promotion::Promoted { bytes } => format!("promoted ({bytes} bytes)"),
                Promotion::Failed { reason } => format!("failed ({reason})"),
            };
            tracing::info!(
                tier = %resolution.tier,
                entities = resolution.index.len(),
                aliases = resolution.index.alias_count(),
                fingerprint = %short_hex(&resolution.index.fingerprint()),
                promotion = %promotion,
                "Alias index ready"
            );
            Ok(())
        }
        Err(ResolveError::AllTiersExhausted { failures }) => {
            for failure in &failures {
                tracing::error!(%failure, "Tier failed");
            }
            tracing::error!("No alias source available; alias features disabled");
            std::process::exit(EXIT_EXHAUSTED);
        }
    }
}
