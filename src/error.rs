//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/15 10:12:40 Monday
//! brief: crate error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell step must be positive")]
    ZeroStep,
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },
    #[error("board {width}x{height} is not divisible into {step}px cells")]
    Misaligned { width: u32, height: u32, step: u32 },
    #[error("board of {columns}x{rows} cells cannot hold the starting snake")]
    TooSmall { columns: u32, rows: u32 },
    #[error("board of {columns}x{rows} cells is too large")]
    TooLarge { columns: u32, rows: u32 },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite directory {0} does not exist")]
    MissingDirectory(PathBuf),
    #[error("failed to read sprite {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sprite {0} is not a PNG image")]
    NotPng(PathBuf),
}
