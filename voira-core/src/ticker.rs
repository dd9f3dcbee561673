//! Ownership of the repeating tick task that drives the demo player
//!
//! The UI runtime spawns the actual timer; the controller only keeps its
//! handle so that a pause, a completion or an unmount always cancels it and
//! at most one tick task is ever alive per player.

use crate::config::PlayerConfig;
use crate::error::Result;
use crate::playback::{Playback, Tick};
use std::time::Duration;
use tracing::trace;

/// A cancellable handle to a spawned repeating task
pub trait TaskHandle {
    fn cancel(self);
}

/// Demo player state together with the handle of its tick task
#[derive(Debug)]
pub struct PlayerController<H: TaskHandle> {
    playback: Playback,
    tick_period: Duration,
    task: Option<H>,
}

impl<H: TaskHandle> PlayerController<H> {
    pub fn new(config: PlayerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// `config` must already have passed [`PlayerConfig::validate`]
    fn from_validated(config: PlayerConfig) -> Self {
        Self {
            playback: Playback::new(config.duration_secs),
            tick_period: config.tick_period,
            task: None,
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Whether a tick task is currently held
    pub fn has_task(&self) -> bool {
        self.task.is_some()
    }

    /// Toggle playback. When this starts playing, `start` is called to spawn
    /// a fresh tick task; any previously held task is cancelled first.
    pub fn toggle_play<F>(&mut self, start: F) -> bool
    where
        F: FnOnce() -> H,
    {
        self.cancel_task();
        let playing = self.playback.toggle_play();
        if playing {
            self.task = Some(start());
        }
        playing
    }

    /// Feed one timer tick. Completion releases the tick task.
    pub fn tick(&mut self) -> Tick {
        let tick = self.playback.tick();
        if tick == Tick::Completed {
            self.cancel_task();
        }
        tick
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            trace!("cancelling tick task");
            task.cancel();
        }
    }
}

impl<H: TaskHandle> Default for PlayerController<H> {
    fn default() -> Self {
        Self::from_validated(PlayerConfig::default())
    }
}

impl<H: TaskHandle> Drop for PlayerController<H> {
    fn drop(&mut self) {
        self.cancel_task();
    }
}
