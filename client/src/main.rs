use anyhow::Context;
use clap::Parser;
use libgame::controller::SimulationController;
use log::info;

use config::Config;

mod config;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Starting {}x{} board, {}px cells, {}ms ticks, seed {seed}",
        config.rows, config.cols, config.cell_size, config.interval_ms
    );

    let mut controller = SimulationController::from_seed(config.rows, config.cols, seed)
        .context("Creating simulation")?;

    if config.start {
        controller.toggle();
    }

    renderer::run(controller, &config)
}
