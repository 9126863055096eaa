//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::storage::JsonStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub store: Arc<JsonStore>,
}

impl AppState {
    pub fn new(dataset: Dataset, store: JsonStore) -> Self {
        Self {
            dataset: Arc::new(dataset),
            store: Arc::new(store),
        }
    }

    /// Generate the dataset and open the store described by `config`.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Dataset::generate(config.dataset_size),
            JsonStore::new(config.save_path.clone()),
        )
    }
}
