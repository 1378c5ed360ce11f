mod app;
pub mod config;

use std::sync::Arc;

use anyhow::Result;
use kennel_axum::KennelApp;
use kennel_core::{DogGateway, KennelConfig, MemoryGateway};

/// Build the app over a fresh in-memory store.
pub fn build(config: KennelConfig) -> Result<KennelApp> {
    build_with(config, Arc::new(MemoryGateway::new()))
}

/// Build the app over any gateway.
pub fn build_with(config: KennelConfig, gateway: Arc<dyn DogGateway>) -> Result<KennelApp> {
    config::check(&config)?;
    Ok(app::kennel_app(config, gateway))
}
