use axum::handler::Handler;
use axum::routing::get;
use axum::Router;
use kennel_core::{DogService, KennelConfig};
use tokio::net::{TcpListener, ToSocketAddrs};

use crate::middlewares;
use crate::rest;

/// The Kennel HTTP application: the `/dogs` routes, any extra routes, and the
/// configuration they were built with.
#[derive(Clone)]
pub struct KennelApp {
    pub config: KennelConfig,
    routes: Router<()>,
}

impl KennelApp {
    pub fn new(service: DogService) -> Self {
        Self {
            config: KennelConfig::new(),
            routes: rest::dog_router(service),
        }
    }

    pub fn with_config(mut self, config: KennelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.to_string())
    }

    pub fn use_router(mut self, router: Router<()>) -> Self {
        self.routes = self.routes.merge(router);
        self
    }

    pub fn use_get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()> + Clone + Send + 'static,
        T: 'static,
    {
        let router = Router::new().route(path, get(handler));
        self.use_router(router)
    }

    /// All routes wrapped in the shared middleware stack.
    pub fn router(&self) -> Router<()> {
        middlewares::apply(self.routes.clone())
    }

    pub async fn listen<A>(self, addr: A) -> anyhow::Result<()>
    where
        A: ToSocketAddrs,
    {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "kennel listening");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

pub fn kennel(service: DogService) -> KennelApp {
    KennelApp::new(service)
}
