//! Command-line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use task_api::{DEFAULT_API_BASE_URL, FrontendConfig};

/// Serves the task front-end and points it at a tasks API.
#[derive(Debug, Clone, Parser)]
#[command(name = "task-server", version)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TASK_DESK_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Base URL of the tasks REST API, as seen from the browser.
    #[arg(long, env = "TASK_DESK_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// List tasks once at start-up and log whether the API is reachable.
    #[arg(long, env = "TASK_DESK_PROBE_API")]
    pub probe_api: bool,
}

impl ServerConfig {
    /// Configuration injected into the served page.
    pub fn frontend(&self) -> FrontendConfig {
        FrontendConfig {
            api_base_url: self.api_base_url.clone(),
        }
    }
}
