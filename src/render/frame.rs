//! file: frame.rs
//! author: Jacob Xie
//! date: 2025/12/15 15:02:19 Monday
//! brief: turns a game state into a list of draw commands

use crate::game::{Board, Cell, GameState, GameStatus};

use super::Sprite;

pub const BACKGROUND: u32 = 0xadd8e6;
pub const HUD_COLOR: u32 = 0xffffff;
pub const GAME_OVER_COLOR: u32 = 0xff0000;
pub const WIN_COLOR: u32 = 0xffd700;

const HUD_SIZE: f32 = 25.0;
const BANNER_SIZE: f32 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill { color: u32 },
    Sprite { sprite: Sprite, cell: Cell },
    /// `y` is the text baseline, in pixels.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: u32,
    },
}

/// Everything needed to paint one picture of the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub board: Board,
    pub commands: Vec<DrawCommand>,
}

pub fn render(state: &GameState) -> Frame {
    let mut commands = vec![DrawCommand::Fill { color: BACKGROUND }];

    if let Some(food) = state.food() {
        commands.push(DrawCommand::Sprite {
            sprite: Sprite::Food,
            cell: food,
        });
    }

    let snake = state.snake();
    let last = snake.len().saturating_sub(1);
    for (i, &cell) in snake.iter().enumerate() {
        let sprite = if i == 0 {
            Sprite::Head(state.heading())
        } else if i == last {
            // points away from the segment in front of it
            let tail = snake[i - 1].direction_to(cell).unwrap_or(state.heading());
            Sprite::Tail(tail)
        } else {
            Sprite::Body
        };
        commands.push(DrawCommand::Sprite { sprite, cell });
    }

    commands.push(hud(format!("Score: {}", state.score()), 10.0));
    commands.push(hud(format!("Difficulty: {}", state.difficulty()), 150.0));

    match state.status() {
        GameStatus::GameOver(_) => commands.push(banner("Game Over!", GAME_OVER_COLOR)),
        GameStatus::Won => commands.push(banner("You win!", WIN_COLOR)),
        GameStatus::Ready | GameStatus::Running | GameStatus::Paused => {}
    }

    Frame {
        board: *state.board(),
        commands,
    }
}

fn hud(text: String, x: f32) -> DrawCommand {
    DrawCommand::Text {
        text,
        x,
        y: 25.0,
        size: HUD_SIZE,
        color: HUD_COLOR,
    }
}

fn banner(text: &str, color: u32) -> DrawCommand {
    DrawCommand::Text {
        text: text.to_string(),
        x: 150.0,
        y: 150.0,
        size: BANNER_SIZE,
        color,
    }
}
