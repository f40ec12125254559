//! file: view.rs
//! author: Jacob Xie
//! date: 2025/12/15 16:12:58 Monday
//! brief: gpui entity that paints frames, owns the tick timer and routes input

use std::{path::PathBuf, time::Duration};

use gpui::{
    AnyElement, App, ClickEvent, Context, Div, FocusHandle, Focusable, Render, Stateful, Task,
    Timer, Window, actions, div, img, prelude::*, px, rgb,
};
use log::{debug, error, info};
use rand::rngs::StdRng;

use crate::{
    config::GameConfig,
    game::{
        Board, Cell, Difficulty, Direction, GameState, GameStatus, LoopController, LoopState,
    },
    render::{DrawCommand, Frame, Sprite, SpriteSheet, render},
};

actions!(
    snake,
    [
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        TogglePause,
        ResetGame,
        QuitGame
    ]
);

enum Assets {
    Loading,
    /// `None` paints glyphs instead of images.
    Ready(Option<SpriteSheet>),
}

pub struct SnakeView {
    config: GameConfig,
    game: GameState,
    rng: StdRng,
    controller: LoopController,
    ticker: Option<Task<()>>,
    frame: Frame,
    assets: Assets,
    focus_handle: FocusHandle,
}

impl SnakeView {
    pub fn new(config: GameConfig, cx: &mut Context<Self>) -> Self {
        let mut rng = config.rng();
        let game = GameState::new(config.board, config.difficulty, &mut rng);
        let frame = render(&game);
        let assets = match config.sprite_dir.clone() {
            Some(dir) => {
                Self::load_sprites(dir, cx);
                Assets::Loading
            }
            None => Assets::Ready(None),
        };

        Self {
            config,
            game,
            rng,
            controller: LoopController::new(),
            ticker: None,
            frame,
            assets,
            focus_handle: cx.focus_handle(),
        }
    }

    fn load_sprites(dir: PathBuf, cx: &mut Context<Self>) {
        info!("loading sprites from {}", dir.display());
        let load = cx.background_spawn(async move { SpriteSheet::load(&dir) });
        cx.spawn(async move |this, cx| {
            let sheet = match load.await {
                Ok(sheet) => Some(sheet),
                Err(err) => {
                    error!("sprite loading failed, drawing glyphs instead: {err}");
                    None
                }
            };
            this.update(cx, |view, cx| {
                view.assets = Assets::Ready(sheet);
                cx.notify();
            })
            .ok();
        })
        .detach();
    }

    fn spawn_ticker(interval: Duration, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |this, cx| {
            loop {
                Timer::after(interval).await;
                match this.update(cx, |view, cx| view.tick(cx)) {
                    Ok(true) => {}
                    Ok(false) | Err(_) => break,
                }
            }
        })
    }

    /// Update step followed by render step. Returns whether ticking goes on.
    fn tick(&mut self, cx: &mut Context<Self>) -> bool {
        let outcome = self.game.step(&mut self.rng);
        self.refresh(cx);

        let keep_ticking = self.controller.after_step(outcome);
        if self.controller.is_terminated() {
            // the loop exits on its own once this returns false
            if let Some(task) = self.ticker.take() {
                task.detach();
            }
        }
        keep_ticking
    }

    fn refresh(&mut self, cx: &mut Context<Self>) {
        self.frame = render(&self.game);
        cx.notify();
    }

    fn assets_ready(&self) -> bool {
        matches!(self.assets, Assets::Ready(_))
    }

    fn play(&mut self, cx: &mut Context<Self>) {
        if !self.assets_ready() {
            debug!("play ignored while sprites load");
            return;
        }
        let interval = self.game.difficulty().interval();
        if !self.game.start() {
            return;
        }
        if self.controller.start(interval) {
            self.ticker = Some(Self::spawn_ticker(interval, cx));
        }
        self.refresh(cx);
    }

    fn pause(&mut self, cx: &mut Context<Self>) {
        self.game.pause();
        self.controller.stop();
        // dropping the task cancels the timer
        self.ticker = None;
        self.refresh(cx);
    }

    fn toggle_pause(&mut self, cx: &mut Context<Self>) {
        if self.controller.is_running() {
            self.pause(cx);
        } else {
            self.play(cx);
        }
    }

    fn set_difficulty(&mut self, difficulty: Difficulty, cx: &mut Context<Self>) {
        info!("difficulty set to {difficulty}");
        self.game.set_difficulty(difficulty);
        self.refresh(cx);
    }

    /// Throws the whole game away and builds a fresh one from the config.
    fn reset(&mut self, cx: &mut Context<Self>) {
        info!("game reset");
        self.ticker = None;
        self.controller = LoopController::new();
        self.rng = self.config.rng();
        self.game = GameState::new(self.config.board, self.config.difficulty, &mut self.rng);
        self.refresh(cx);
    }

    fn turn(&mut self, direction: Direction) {
        if !self.game.request_heading(direction) {
            debug!("turn {direction:?} rejected while heading {:?}", self.game.heading());
        }
    }

    fn status_text(&self) -> (String, u32) {
        if !self.assets_ready() {
            return ("Loading sprites".to_string(), 0x93c5fd);
        }
        match self.game.status() {
            GameStatus::Ready => ("Ready".to_string(), 0x93c5fd),
            GameStatus::Running => {
                let tick = match self.controller.state() {
                    LoopState::Running { interval } => interval.as_millis(),
                    LoopState::Stopped => 0,
                };
                (format!("Running ({tick}ms)"), 0x34d399)
            }
            GameStatus::Paused => ("Paused".to_string(), 0xfbbf24),
            GameStatus::GameOver(collision) => (format!("Game Over ({collision:?})"), 0xf87171),
            GameStatus::Won => ("Board cleared".to_string(), 0xfacc15),
        }
    }

    fn paint_frame(&self) -> Div {
        let board = self.frame.board;
        let sheet = match &self.assets {
            Assets::Ready(sheet) => sheet.as_ref(),
            Assets::Loading => None,
        };

        let mut canvas = div()
            .relative()
            .overflow_hidden()
            .w(px(board.width_px() as f32))
            .h(px(board.height_px() as f32));

        for command in &self.frame.commands {
            canvas = match command {
                DrawCommand::Fill { color } => canvas.bg(rgb(*color)),
                DrawCommand::Sprite { sprite, cell } => {
                    canvas.child(paint_sprite(&board, *sprite, *cell, sheet))
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                } => canvas.child(
                    div()
                        .absolute()
                        .left(px(*x))
                        .top(px(*y - *size))
                        .text_size(px(*size))
                        .text_color(rgb(*color))
                        .child(text.clone()),
                ),
            };
        }

        canvas
    }
}

fn paint_sprite(board: &Board, sprite: Sprite, cell: Cell, sheet: Option<&SpriteSheet>) -> AnyElement {
    let (x, y) = board.origin_px(cell);
    let size = px(board.step() as f32);
    let slot = div().absolute().left(px(x)).top(px(y)).w(size).h(size);

    match sheet.and_then(|sheet| sheet.image(sprite)) {
        Some(image) => slot
            .child(img(image).w(size).h(size))
            .into_any_element(),
        None => slot
            .flex()
            .items_center()
            .justify_center()
            .text_size(size)
            .text_color(rgb(sprite.glyph_color()))
            .child(sprite.glyph())
            .into_any_element(),
    }
}

fn button(id: &'static str, label: &'static str, enabled: bool) -> Stateful<Div> {
    div()
        .id(id)
        .px_3()
        .py_2()
        .rounded_md()
        .bg(rgb(if enabled { 0x1e293b } else { 0x475569 }))
        .text_color(rgb(if enabled { 0xf8fafc } else { 0x94a3b8 }))
        .cursor_pointer()
        .child(label)
}

impl Render for SnakeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (status_text, status_color) = self.status_text();
        let running = self.controller.is_running();
        let can_play = running || (self.assets_ready() && !self.game.status().is_terminal());
        let choosing_difficulty = self.game.status() == GameStatus::Ready;

        let controls = div()
            .flex()
            .gap_3()
            .items_center()
            .child(
                button("reset", "Reset", true)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.reset(cx))),
            )
            .child(
                button("pause", if running { "Pause" } else { "Play" }, can_play)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.toggle_pause(cx))),
            )
            .when(choosing_difficulty, |this| {
                this.children(Difficulty::ALL.map(|difficulty| {
                    button(difficulty.label(), difficulty.label(), true).on_click(cx.listener(
                        move |this, _: &ClickEvent, _, cx| this.set_difficulty(difficulty, cx),
                    ))
                }))
            })
            .child(
                div()
                    .text_lg()
                    .text_color(rgb(status_color))
                    .child(status_text),
            );

        let instructions = [
            "Arrows / WASD to steer",
            "Space to play or pause",
            "Enter to reset",
            "Esc to quit",
        ];

        div()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("sprite-snake")
            .on_action(cx.listener(|this, _: &MoveUp, _, _| this.turn(Direction::Up)))
            .on_action(cx.listener(|this, _: &MoveDown, _, _| this.turn(Direction::Down)))
            .on_action(cx.listener(|this, _: &MoveLeft, _, _| this.turn(Direction::Left)))
            .on_action(cx.listener(|this, _: &MoveRight, _, _| this.turn(Direction::Right)))
            .on_action(cx.listener(|this, _: &TogglePause, _, cx| this.toggle_pause(cx)))
            .on_action(cx.listener(|this, _: &ResetGame, _, cx| this.reset(cx)))
            .child(controls)
            .child(self.paint_frame())
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .text_sm()
                    .text_color(rgb(0xcbd5f5))
                    .children(instructions.into_iter().map(|text| {
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(0x1e293b))
                            .child(text)
                    })),
            )
    }
}

impl Focusable for SnakeView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
