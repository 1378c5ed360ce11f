use std::sync::Arc;

use kennel_axum::{kennel, KennelApp};
use kennel_core::{DogGateway, DogService, KennelConfig};

pub fn kennel_app(config: KennelConfig, gateway: Arc<dyn DogGateway>) -> KennelApp {
    let service = DogService::new(gateway);

    kennel(service)
        .with_config(config)
        .use_get("/health", || async { "ok" })
}
