//! Wiring & DI. Entry point: bootstrap adapters, inject into the fetcher, serve HTTP.
//! No business logic here.

use dotenv::dotenv;
use next_actions::adapters::http;
use next_actions::adapters::trello::TrelloAdapter;
use next_actions::ports::{ActionsPort, BoardService};
use next_actions::shared::config::AppConfig;
use next_actions::usecases::ActionFetcher;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let trello_cfg = Arc::new(cfg.trello_config()?);
    info!(
        base_url = %trello_cfg.base_url,
        next_actions_list = %trello_cfg.next_actions_list_id,
        projects_list = %trello_cfg.projects_list_id,
        "Trello configured"
    );

    // --- Board service client ---
    let timeout = cfg.request_timeout_or_default();
    let board_service: Arc<dyn BoardService> =
        Arc::new(TrelloAdapter::new(&trello_cfg, timeout)?);

    // --- Fetcher (inbound port for HTTP) ---
    let actions: Arc<dyn ActionsPort> = Arc::new(ActionFetcher::new(
        Arc::clone(&board_service),
        Arc::clone(&trello_cfg),
    ));

    // --- Serve ---
    let app = http::router(actions);
    http::serve(&cfg.bind_addr_or_default(), app).await
}
