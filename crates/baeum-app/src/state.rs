use std::sync::Arc;

use tokio::sync::RwLock;

use baeum_config::Config;
use baeum_engine::Engine;

pub struct AppState {
    pub config: RwLock<Config>,
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self {
            config: RwLock::new(config),
            engine,
        }
    }
}
