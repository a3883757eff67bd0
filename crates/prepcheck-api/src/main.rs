//! HTTP API binary: loads the knowledge base and classifier artifacts, then
//! serves the survey endpoints until shutdown.

mod error;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;

use prepcheck_core::{KnowledgeBase, RecommendationPolicy, RegionMode};
use prepcheck_model::load_classifier;

use crate::routes::AppState;

#[derive(Debug, Parser)]
#[command(name = "prepcheck-api", about = "Household disaster-preparedness assessment API")]
struct Args {
    /// Address to bind.
    #[arg(long, env = "PREPCHECK_ADDR", default_value = "127.0.0.1:8000")]
    addr: SocketAddr,

    /// Directory holding model.onnx, labels.json, and features.json.
    #[arg(long, env = "PREPCHECK_MODEL_DIR", default_value = "model")]
    model_dir: PathBuf,

    /// Region mapping mode: curated | universal.
    #[arg(long, env = "PREPCHECK_REGION_MODE", default_value = "curated")]
    region_mode: RegionMode,

    /// Recommendation policy: tiered-checklist | fixed-actions.
    #[arg(long, env = "PREPCHECK_POLICY", default_value = "tiered-checklist")]
    policy: RecommendationPolicy,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let kb = Arc::new(KnowledgeBase::new(args.region_mode));
    let summary = kb.summary();
    info!(
        regions = summary.regions,
        disaster_types = summary.disaster_types,
        mode = args.region_mode.as_str(),
        "knowledge base ready"
    );

    let classifier = Arc::new(
        load_classifier(&args.model_dir)
            .with_context(|| format!("loading classifier artifacts from {}", args.model_dir.display()))?,
    );

    let state = AppState { kb, classifier, policy: args.policy };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    info!(addr = %args.addr, policy = args.policy.as_str(), "starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("server shutdown complete");
    Ok(())
}

/// Resolve when either Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl+C received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}
