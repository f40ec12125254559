//! file: sprites.rs
//! author: Jacob Xie
//! date: 2025/12/15 15:20:44 Monday
//! brief: sprite kinds and the image files behind them

use std::{collections::HashMap, fs, path::Path, sync::Arc};

use gpui::{Image, ImageFormat};
use log::{debug, info};

use crate::{error::AssetError, game::Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Head(Direction),
    Tail(Direction),
    Body,
    Food,
}

impl Sprite {
    pub const ALL: [Sprite; 10] = [
        Sprite::Head(Direction::Left),
        Sprite::Head(Direction::Right),
        Sprite::Head(Direction::Up),
        Sprite::Head(Direction::Down),
        Sprite::Tail(Direction::Left),
        Sprite::Tail(Direction::Right),
        Sprite::Tail(Direction::Up),
        Sprite::Tail(Direction::Down),
        Sprite::Body,
        Sprite::Food,
    ];

    pub fn file_name(self) -> String {
        match self {
            Sprite::Head(direction) => format!("snake_head_{}.png", direction.name()),
            Sprite::Tail(direction) => format!("snake_tail_{}.png", direction.name()),
            Sprite::Body => "snake_body.png".to_string(),
            Sprite::Food => "food.png".to_string(),
        }
    }

    /// Stand-in drawn when no sprite images are configured.
    pub fn glyph(self) -> &'static str {
        match self {
            Sprite::Head(Direction::Up) => "▲",
            Sprite::Head(Direction::Down) => "▼",
            Sprite::Head(Direction::Left) => "◀",
            Sprite::Head(Direction::Right) => "▶",
            Sprite::Tail(Direction::Up) => "▴",
            Sprite::Tail(Direction::Down) => "▾",
            Sprite::Tail(Direction::Left) => "◂",
            Sprite::Tail(Direction::Right) => "▸",
            Sprite::Body => "■",
            Sprite::Food => "●",
        }
    }

    pub fn glyph_color(self) -> u32 {
        match self {
            Sprite::Head(_) => 0x1b5e20,
            Sprite::Tail(_) => 0x66bb6a,
            Sprite::Body => 0x2e7d32,
            Sprite::Food => 0xe65100,
        }
    }
}

const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// All sprite images, read into memory before the game may start.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    images: HashMap<Sprite, Arc<Image>>,
}

impl SpriteSheet {
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        if !dir.is_dir() {
            return Err(AssetError::MissingDirectory(dir.to_path_buf()));
        }

        let mut images = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let path = dir.join(sprite.file_name());
            let bytes = fs::read(&path).map_err(|source| AssetError::Unreadable {
                path: path.clone(),
                source,
            })?;
            if !bytes.starts_with(&PNG_SIGNATURE) {
                return Err(AssetError::NotPng(path));
            }
            debug!("loaded {} ({} bytes)", path.display(), bytes.len());
            images.insert(sprite, Arc::new(Image::from_bytes(ImageFormat::Png, bytes)));
        }

        info!("loaded {} sprites from {}", images.len(), dir.display());
        Ok(Self { images })
    }

    pub fn image(&self, sprite: Sprite) -> Option<Arc<Image>> {
        self.images.get(&sprite).cloned()
    }
}
