use anyhow::Result;

use profile_badges::api::{AppState, run_api};
use profile_badges::badge::BadgeRegistry;
use profile_badges::config::loader::load_with_discovery;
use profile_badges::supervisor::Supervisor;
use profile_badges::{db, metrics_exporter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    metrics_exporter::init_metrics()?;

    let config = load_with_discovery()?;
    let pool = db::init_pool().await?;

    let registry = BadgeRegistry::from_config(&config);
    tracing::info!(badges = registry.len(), "badge registry loaded");

    let state = AppState::new(pool, registry);
    let bind_addr = config.server.bind_addr.clone();

    let mut supervisor = Supervisor::new();
    supervisor.spawn("api", move |shutdown| run_api(state, bind_addr, shutdown));
    supervisor.run().await
}
