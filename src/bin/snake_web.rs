//! Browser Snake runner.
//!
//! Serves the game page and its JSON API. Bind address comes from
//! `--host` / `--port` (default `127.0.0.1:8080`).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use tui_snake::web::{run_server, ServerConfig, Session};

#[tokio::main]
async fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = ServerConfig::from_args(std::env::args().skip(1))?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    log::info!("starting snake-web (seed {seed})");
    run_server(config, Session::shared(seed), None).await
}
