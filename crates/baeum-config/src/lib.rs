use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::engine::EngineConfig;
use self::store::StoreConfig;
use self::transport::TransportConfig;

pub mod catalog;
pub mod engine;
pub mod store;
pub mod transport;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub transport: TransportConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            engine: EngineConfig::new(),
            store: StoreConfig::new(),
            catalog: CatalogConfig::new(),
            transport: TransportConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
