use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use baeum_config::Config;
use baeum_core::transport::Transport;
use baeum_engine::Engine;
use baeum_lang_korean::CurriculumLoader;
use baeum_store::JsonStore;
use baeum_transport::BotApiClient;

mod controller;
mod events;
mod io;
mod state;

use self::controller::AppController;
use self::io::ConsoleTransport;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let config = Config::new();

    let curriculum = match (&config.catalog.alphabet_path, &config.catalog.vocabulary_path) {
        (Some(alphabet), Some(vocabulary)) => {
            CurriculumLoader::load_from_files(Path::new(alphabet), Path::new(vocabulary))?
        }
        _ => CurriculumLoader::load_embedded()?,
    };

    let store = Arc::new(JsonStore::open(&config.store.data_dir)?);
    let engine = Arc::new(Engine::new(
        Arc::new(curriculum),
        store,
        config.engine.clone(),
    ));

    let transport: Arc<dyn Transport> = if config.transport.enabled {
        Arc::new(BotApiClient::new(
            config.transport.api_url.clone(),
            config.transport.token.clone(),
        ))
    } else {
        tracing::info!("Bot API disabled, printing replies to stdout");
        Arc::new(ConsoleTransport)
    };

    let state = Arc::new(AppState::new(config, engine));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(transport);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("a task exited"),
                Some(Ok(Err(e))) => tracing::error!("a task failed: {e}"),
                Some(Err(e)) => tracing::error!("a task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}
