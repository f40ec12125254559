//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/15 15:00:02 Monday
//! brief: pure render step and sprite assets

mod frame;
mod sprites;

pub use frame::{DrawCommand, Frame, render};
pub use sprites::{Sprite, SpriteSheet};
