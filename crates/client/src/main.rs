//! Dungeon game client binary.
//!
//! Composition root: loads configuration, installs file logging, takes over
//! the terminal, and runs the turn loop until the session ends.

use std::process::ExitCode;

use anyhow::Result;
use dungeon_client::{CliConfig, KeyboardInput, TerminalGuard, TuiRenderer, logging};
use runtime::{Runtime, RuntimeConfig};

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&cli_config.log_dir)?;
    tracing::info!(
        seed = runtime_config.seed,
        hostiles = runtime_config.hostiles,
        scenario = ?runtime_config.scenario_path,
        "starting dungeon"
    );

    // 3. Level setup happens before the terminal is taken over so setup
    //    errors print normally.
    let scenario = runtime_config.scenario()?;

    // 4. Build and run
    let renderer = TuiRenderer::new(TerminalGuard::init()?, scenario.room);
    let mut runtime = Runtime::builder()
        .config(runtime_config)
        .scenario(scenario)
        .command_source(KeyboardInput::new())
        .renderer(renderer)
        .build()?;

    let result = runtime.run();
    // Restores the terminal before any error is printed.
    drop(runtime);

    let code = result?;
    tracing::info!(code, "dungeon exited");
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
