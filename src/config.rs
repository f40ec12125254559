//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/15 09:48:31 Monday
//! brief: command-line options

use std::path::PathBuf;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use simplelog::LevelFilter;

use crate::{
    error::ConfigError,
    game::{Board, DEFAULT_HEIGHT_PX, DEFAULT_STEP_PX, DEFAULT_WIDTH_PX, Difficulty},
};

/// Snake on a sprite-drawn board.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board width in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WIDTH_PX)]
    pub width: u32,
    /// Board height in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_HEIGHT_PX)]
    pub height: u32,
    /// Edge length of one grid cell in pixels.
    #[arg(
        long = "block-size",
        value_name = "PIXELS",
        default_value_t = DEFAULT_STEP_PX,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub block_size: u32,
    /// Starting difficulty; can be changed before the first start.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Directory holding the snake_head_*, snake_tail_*, snake_body and food PNGs.
    #[arg(long, value_name = "DIR")]
    pub sprites: Option<PathBuf>,
    /// Most verbose log level to emit (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub board: Board,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub sprite_dir: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::new(cli.width, cli.height, cli.block_size)?,
            difficulty: cli.difficulty,
            seed: cli.seed,
            sprite_dir: cli.sprites.clone(),
        })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
