use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub filter: String,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address {:?}", self.bind_address))
    }
}

/// Defaults, then the optional `config/server` file, then `PROGRESS__*` environment variables
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    server_config_from(config::File::with_name("config/server").required(false))
}

fn server_config_from<S>(file: S) -> anyhow::Result<ServerConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("log.filter", DEFAULT_LOG_FILTER)?
        .add_source(file)
        .add_source(config::Environment::with_prefix("PROGRESS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
