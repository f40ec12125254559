//! file: state.rs
//! author: Jacob Xie
//! date: 2025/12/15 11:30:08 Monday
//! brief: game state, update step and heading requests

use std::collections::{HashSet, VecDeque};

use log::{debug, info};
use rand::Rng;

use super::{Board, Cell, Collision, Difficulty, Direction, GameStatus, place_food};

const INITIAL_LENGTH: i32 = 3;

/// Result of a single update step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game was not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
    /// The snake grew over the last free cell.
    BoardFilled,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snake: VecDeque<Cell>,
    heading: Direction,
    next_heading: Direction,
    food: Option<Cell>,
    score: u32,
    difficulty: Difficulty,
    status: GameStatus,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(board: Board, difficulty: Difficulty, rng: &mut R) -> Self {
        let snake = Self::build_initial_snake(&board);
        let occupied: HashSet<Cell> = snake.iter().copied().collect();
        let food = place_food(rng, &board, &occupied);

        Self {
            board,
            snake,
            heading: Direction::Right,
            next_heading: Direction::Right,
            food,
            score: 0,
            difficulty,
            status: GameStatus::Ready,
        }
    }

    fn build_initial_snake(board: &Board) -> VecDeque<Cell> {
        let head = board.center();
        (0..INITIAL_LENGTH)
            .map(|offset| Cell::new(head.x - offset, head.y))
            .collect()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Head first, tail last.
    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.snake.iter().copied().collect()
    }

    /// Moves to `Running`. Refused once the game has ended.
    pub fn start(&mut self) -> bool {
        match self.status {
            GameStatus::Ready | GameStatus::Paused => {
                self.status = GameStatus::Running;
                true
            }
            GameStatus::Running | GameStatus::GameOver(_) | GameStatus::Won => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.status.is_running() {
            self.status = GameStatus::Paused;
            true
        } else {
            false
        }
    }

    /// Changes the label and the interval used by the next start. Score and
    /// snake are left alone.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Queues a heading for the next step. The latest accepted request wins;
    /// a request opposite to the heading currently travelled is dropped.
    pub fn request_heading(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() || direction.is_opposite(self.heading) {
            return false;
        }
        self.next_heading = direction;
        true
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        if !self.status.is_running() {
            return StepOutcome::Idle;
        }
        let Some(head) = self.head() else {
            return StepOutcome::Idle;
        };

        self.heading = self.next_heading;
        let next = head.offset(self.heading);

        if !self.board.in_bounds(next) {
            return self.crash(Collision::Wall, next);
        }
        if self.snake.iter().skip(1).any(|&cell| cell == next) {
            return self.crash(Collision::SelfHit, next);
        }

        self.snake.push_front(next);

        if self.food != Some(next) {
            self.snake.pop_back();
            return StepOutcome::Moved;
        }

        self.score += 1;
        self.food = place_food(rng, &self.board, &self.occupied());
        match self.food {
            Some(food) => {
                debug!("ate at {next:?}, score {}, food moved to {food:?}", self.score);
                StepOutcome::Ate
            }
            None => {
                info!("board filled with score {}", self.score);
                self.status = GameStatus::Won;
                StepOutcome::BoardFilled
            }
        }
    }

    fn crash(&mut self, collision: Collision, at: Cell) -> StepOutcome {
        info!("{collision:?} collision at {at:?} with score {}", self.score);
        self.status = GameStatus::GameOver(collision);
        StepOutcome::Crashed(collision)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        snake: &[Cell],
        heading: Direction,
        food: Option<Cell>,
    ) -> Self {
        Self {
            board,
            snake: snake.iter().copied().collect(),
            heading,
            next_heading: heading,
            food,
            score: 0,
            difficulty: Difficulty::Easy,
            status: GameStatus::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
        points.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn running(snake: &[(i32, i32)], heading: Direction, food: (i32, i32)) -> GameState {
        let mut state = GameState::from_parts(
            Board::default(),
            &cells(snake),
            heading,
            Some(Cell::new(food.0, food.1)),
        );
        assert!(state.start());
        state
    }

    #[test]
    fn starts_paused_in_the_middle() {
        let mut rng = StdRng::seed_from_u64(0);
        let state = GameState::new(Board::default(), Difficulty::Easy, &mut rng);

        assert_eq!(state.status(), GameStatus::Ready);
        assert_eq!(
            state.snake().iter().copied().collect::<Vec<_>>(),
            cells(&[(16, 12), (15, 12), (14, 12)])
        );
        assert_eq!(state.heading(), Direction::Right);
        let food = state.food().unwrap();
        assert!(!state.occupied().contains(&food));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (20, 20));

        assert_eq!(state.step(&mut rng), StepOutcome::Moved);
        assert_eq!(
            state.snake().iter().copied().collect::<Vec<_>>(),
            cells(&[(6, 5), (5, 5), (4, 5)])
        );
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), Some(Cell::new(20, 20)));
    }

    #[test]
    fn eating_grows_and_relocates_food() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (6, 5));

        assert_eq!(state.step(&mut rng), StepOutcome::Ate);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.head(), Some(Cell::new(6, 5)));
        let food = state.food().unwrap();
        assert!(!state.occupied().contains(&food));
        assert!(state.board().in_bounds(food));
    }

    #[test]
    fn wall_ends_the_game() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = running(&[(31, 5), (30, 5), (29, 5)], Direction::Right, (0, 0));

        assert_eq!(
            state.step(&mut rng),
            StepOutcome::Crashed(Collision::Wall)
        );
        assert_eq!(state.status(), GameStatus::GameOver(Collision::Wall));
        assert!(!state.status().is_running());
        assert_eq!(state.head(), Some(Cell::new(31, 5)));
    }

    #[test]
    fn running_into_body_ends_the_game() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = running(
            &[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)],
            Direction::Up,
            (20, 20),
        );

        assert!(state.request_heading(Direction::Left));
        assert_eq!(
            state.step(&mut rng),
            StepOutcome::Crashed(Collision::SelfHit)
        );
        assert_eq!(state.status(), GameStatus::GameOver(Collision::SelfHit));
        assert_eq!(state.snake().len(), 5);
    }

    #[test]
    fn current_tail_cell_still_counts_as_body() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = running(&[(5, 5), (5, 6), (4, 6), (4, 5)], Direction::Up, (20, 20));

        state.request_heading(Direction::Left);
        assert_eq!(
            state.step(&mut rng),
            StepOutcome::Crashed(Collision::SelfHit)
        );
    }

    #[test]
    fn reversal_is_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (20, 20));

        assert!(!state.request_heading(Direction::Left));
        state.step(&mut rng);
        assert_eq!(state.heading(), Direction::Right);
        assert_eq!(state.head(), Some(Cell::new(6, 5)));
    }

    #[test]
    fn reversal_is_checked_against_travelled_heading() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (20, 20));

        assert!(state.request_heading(Direction::Up));
        assert!(!state.request_heading(Direction::Left));
        assert_eq!(state.step(&mut rng), StepOutcome::Moved);
        assert_eq!(state.heading(), Direction::Up);
    }

    #[test]
    fn last_request_wins() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (20, 20));

        assert!(state.request_heading(Direction::Up));
        assert!(state.request_heading(Direction::Down));
        state.step(&mut rng);
        assert_eq!(state.heading(), Direction::Down);
        assert_eq!(state.head(), Some(Cell::new(5, 6)));
    }

    #[test]
    fn step_does_nothing_unless_running() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = GameState::new(Board::default(), Difficulty::Easy, &mut rng);
        let before = state.snake().clone();

        assert_eq!(state.step(&mut rng), StepOutcome::Idle);
        state.start();
        state.pause();
        assert_eq!(state.step(&mut rng), StepOutcome::Idle);
        assert_eq!(state.snake(), &before);
    }

    #[test]
    fn game_over_is_final() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut state = running(&[(31, 5), (30, 5), (29, 5)], Direction::Right, (0, 0));

        state.step(&mut rng);
        assert!(!state.start());
        assert!(!state.pause());
        assert!(!state.request_heading(Direction::Up));
        assert_eq!(state.step(&mut rng), StepOutcome::Idle);
    }

    #[test]
    fn difficulty_change_keeps_progress() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (6, 5));
        state.step(&mut rng);
        let snake = state.snake().clone();

        state.set_difficulty(Difficulty::Hard);
        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake(), &snake);
    }

    #[test]
    fn filling_the_board_wins() {
        let mut rng = StdRng::seed_from_u64(12);
        let board = Board::new(80, 20, 20).unwrap();
        let snake = cells(&[(2, 0), (1, 0), (0, 0)]);
        let mut state = GameState::from_parts(board, &snake, Direction::Right, Some(Cell::new(3, 0)));
        state.start();

        assert_eq!(state.step(&mut rng), StepOutcome::BoardFilled);
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.food(), None);
        assert_eq!(state.snake().len(), 4);
    }

    #[test]
    fn random_walk_never_overlaps() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut state = GameState::new(Board::new(200, 200, 20).unwrap(), Difficulty::Easy, &mut rng);
        state.start();

        for _ in 0..500 {
            let direction = Direction::ALL[rng.gen_range(0..4)];
            state.request_heading(direction);
            let before = state.snake().len();
            match state.step(&mut rng) {
                StepOutcome::Moved => assert_eq!(state.snake().len(), before),
                StepOutcome::Ate => assert_eq!(state.snake().len(), before + 1),
                _ => break,
            }
            assert_eq!(state.occupied().len(), state.snake().len());
            let head = state.head().unwrap();
            let neck = state.snake()[1];
            assert!(head.direction_to(neck).is_some());
        }
    }
}
