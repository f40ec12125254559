//! file: controller.rs
//! author: Jacob Xie
//! date: 2025/12/15 14:05:37 Monday
//! brief: start/stop bookkeeping for the repeating tick timer

use std::time::Duration;

use log::{debug, info};

use super::StepOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    /// Ticking every `interval`.
    Running { interval: Duration },
}

/// Tracks whether the tick timer should exist and at which interval. The
/// owner holds the actual timer and mirrors these transitions onto it.
#[derive(Debug)]
pub struct LoopController {
    state: LoopState,
    terminated: bool,
}

impl LoopController {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            terminated: false,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Returns `false` when already running or after `terminate`.
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.terminated || self.is_running() {
            return false;
        }
        info!("tick timer started at {}ms", interval.as_millis());
        self.state = LoopState::Running { interval };
        true
    }

    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        info!("tick timer stopped");
        self.state = LoopState::Stopped;
        true
    }

    /// Applies the outcome of a tick. Collisions and a filled board end the
    /// loop for good. Returns whether the timer should keep firing.
    pub fn after_step(&mut self, outcome: StepOutcome) -> bool {
        match outcome {
            StepOutcome::Crashed(_) | StepOutcome::BoardFilled => {
                self.terminate();
                false
            }
            StepOutcome::Idle | StepOutcome::Moved | StepOutcome::Ate => self.is_running(),
        }
    }

    /// Stops for good.
    pub fn terminate(&mut self) {
        debug!("tick timer terminated");
        self.state = LoopState::Stopped;
        self.terminated = true;
    }
}

impl Default for LoopController {
    fn default() -> Self {
        Self::new()
    }
}
