//! Mock Storage API - process entry point.
//!
//! Loads `config/{env}.yaml`, applies port/mode overrides, then serves the
//! gateway until killed:
//!
//! ```text
//! mock-storage-api [--env dev] [--port 4000] [--mode dynamic|legacy]
//! ```
//!
//! Port precedence: `--port` flag, then the `PORT` environment variable,
//! then the config file.

use anyhow::Context;

use mock_storage_api::config::{AppConfig, ServeMode};
use mock_storage_api::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Get serve-mode override from command line (--mode argument)
fn get_mode_override() -> Option<ServeMode> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--mode" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env).with_context(|| format!("loading env '{}'", env))?;

    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    } else if let Ok(port) = std::env::var("PORT") {
        config.gateway.port = port
            .parse()
            .with_context(|| format!("invalid PORT environment variable '{}'", port))?;
    }
    if let Some(mode) = get_mode_override() {
        config.gateway.mode = mode;
    }

    let _guard = logging::init_logging(&config);
    tracing::info!(env = %env, mode = ?config.gateway.mode, "configuration loaded");

    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(gateway::run_server(&config))
}
