pub mod adapters;
pub mod config;
pub mod domain;
pub mod transport;

use {adapters::instapay::InstaPay, std::sync::Arc, tokio::sync::RwLock};

#[derive(Clone)]
pub struct AppState {
    pub method: Arc<RwLock<InstaPay>>,
}

impl AppState {
    pub fn new(method: InstaPay) -> Self {
        Self {
            method: Arc::new(RwLock::new(method)),
        }
    }
}
