//! Server configuration.
//!
//! Layered lowest to highest:
//! 1. defaults (`127.0.0.1:3000`, or port 3001 when `KENNEL_ENV=test`)
//! 2. `HTTP_HOST` / `HTTP_PORT`
//! 3. `KENNEL__*` variables, e.g. `KENNEL__HTTP__PORT=8080`

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use kennel_core::KennelConfig;

pub const ENV_PREFIX: &str = "KENNEL__";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const TEST_PORT: &str = "3001";

/// Configuration from the process environment.
pub fn load() -> KennelConfig {
    from_vars(std::env::vars())
}

pub fn from_vars<I>(vars: I) -> KennelConfig
where
    I: IntoIterator<Item = (String, String)>,
{
    let vars: HashMap<String, String> = vars.into_iter().collect();
    let mut config = KennelConfig::new();

    configure_http(&mut config, &vars);
    config.load_vars(ENV_PREFIX, vars);

    config
}

fn configure_http(config: &mut KennelConfig, vars: &HashMap<String, String>) {
    let env = vars
        .get("KENNEL_ENV")
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_else(|| "development".to_string());

    let default_port = if env == "test" { TEST_PORT } else { DEFAULT_PORT };

    let host = vars
        .get("HTTP_HOST")
        .cloned()
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = vars
        .get("HTTP_PORT")
        .cloned()
        .unwrap_or_else(|| default_port.to_string());

    config.set("app.env", env);
    config.set("http.host", host);
    config.set("http.port", port);
}

/// Reject configurations the server cannot start with.
pub fn check(config: &KennelConfig) -> Result<()> {
    let snapshot = config.snapshot();

    if let Some(port) = snapshot.get("http.port") {
        snapshot
            .get_u16("http.port")
            .ok_or_else(|| anyhow!("Invalid http.port: {port}"))?;
    }

    if snapshot.get("http.host").is_some_and(|h| h.trim().is_empty()) {
        return Err(anyhow!("Empty http.host"));
    }

    Ok(())
}
