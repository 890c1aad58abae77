//! synthetic-learner HTTP server binary.
//!
//! # Environment Variables
//!
//! - `PORT` - HTTP port (default: 8080)
//! - `BIND_HOST` - Listen address (default: 0.0.0.0)
//! - `LEARNER_PROFILE` - Optional JSON/YAML profile to preload into `/api/profile`
//! - `RUST_LOG` - Tracing filter (default: "info,synthetic_learner=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use anyhow::Context;
use synthetic_learner::server::{app_router, AppState, ServerConfig};
use synthetic_learner::store::{load_profile_file, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,synthetic_learner=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let state = match std::env::var("LEARNER_PROFILE") {
        Ok(path) if !path.is_empty() => {
            let profile = load_profile_file(&path)
                .with_context(|| format!("Failed to load LEARNER_PROFILE {path}"))?;
            AppState::with_store(ProfileStore::with_profile(profile))
        }
        _ => AppState::new(),
    };

    let app = app_router(state);
    let bind_addr = config.bind_addr();

    tracing::info!("synthetic-learner server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          — liveness probe");
    tracing::info!("  POST /api/persona     — compile a learner profile");
    tracing::info!("  GET  /api/archetypes  — archetype catalog");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
