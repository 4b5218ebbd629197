//! Loadout sandbox binary.
//!
//! Loads item and loadout content, then drives one character through a
//! scripted session and prints the resulting inventory as JSON on stdout.
//! Logs go to stderr and are filtered through `RUST_LOG`.
//!
//! # Examples
//!
//! ```bash
//! # Bundled content, 60 frames per second
//! LOADOUT_TICK_HZ=60 cargo run -p loadout-client
//!
//! # Custom content directory with verbose logs
//! RUST_LOG=loadout_core=debug LOADOUT_DATA_DIR=./my-data cargo run -p loadout-client
//! ```

mod config;
mod session;

use anyhow::Result;

use crate::config::CliConfig;
use crate::session::Session;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::info!(
        data_dir = ?config.data_dir,
        tick_hz = config.tick_hz,
        "starting loadout sandbox"
    );

    let mut session = Session::new(&config)?;
    let dump = session.run()?;
    println!("{}", serde_json::to_string_pretty(&dump)?);

    tracing::info!("session complete");
    Ok(())
}
