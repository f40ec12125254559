//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief: application bootstrap

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, px,
    size,
};
use log::{error, info};

use crate::{
    config::GameConfig,
    view::{
        MoveDown, MoveLeft, MoveRight, MoveUp, QuitGame, ResetGame, SnakeView, TogglePause,
    },
};

/// Room around the board for the control row and the key hints.
const CHROME_WIDTH: f32 = 80.;
const CHROME_HEIGHT: f32 = 200.;

pub fn run(config: GameConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("up", MoveUp, None),
            KeyBinding::new("down", MoveDown, None),
            KeyBinding::new("left", MoveLeft, None),
            KeyBinding::new("right", MoveRight, None),
            KeyBinding::new("w", MoveUp, None),
            KeyBinding::new("s", MoveDown, None),
            KeyBinding::new("a", MoveLeft, None),
            KeyBinding::new("d", MoveRight, None),
            KeyBinding::new("space", TogglePause, None),
            KeyBinding::new("enter", ResetGame, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let board = config.board;
        let bounds = Bounds::centered(
            None,
            size(
                px(board.width_px() as f32 + CHROME_WIDTH),
                px(board.height_px() as f32 + CHROME_HEIGHT),
            ),
            cx,
        );
        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            move |_, cx| cx.new(|cx| SnakeView::new(config, cx)),
        );
        let window = match window {
            Ok(window) => window,
            Err(err) => {
                error!("failed to open window: {err:#}");
                cx.quit();
                return;
            }
        };

        let focused = window.update(cx, |view: &mut SnakeView, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        });
        if let Err(err) = focused {
            error!("failed to focus game window: {err:#}");
        }

        cx.on_action(|_: &QuitGame, cx| {
            info!("quit requested");
            cx.quit()
        });
        cx.activate(true);
    });
}
