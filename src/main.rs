//! file: main.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:30 Sunday
//! brief: entry point

mod app;
mod config;
mod error;
mod game;
mod render;
mod view;

use std::fs::File;

use anyhow::Context;
use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::config::{Cli, GameConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = GameConfig::from_cli(&cli).context("invalid board settings")?;
    info!(
        "starting on a {}x{} board ({}px cells), difficulty {}",
        config.board.columns(),
        config.board.rows(),
        config.board.step(),
        config.difficulty
    );

    app::run(config);
    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(cli.log_level, Config::default(), file)?;
        }
        None => TermLogger::init(
            cli.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}
