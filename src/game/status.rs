//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief: lifecycle of a single game

/// What the snake ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Never started; difficulty may still be picked.
    Ready,
    Running,
    Paused,
    GameOver(Collision),
    /// Every cell is covered by the snake.
    Won,
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver(_) | GameStatus::Won)
    }
}
