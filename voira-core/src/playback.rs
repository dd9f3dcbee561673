//! Simulated playback for the demo call widget

use tracing::debug;

/// Playing flag plus elapsed seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub elapsed_secs: u32,
}

/// What a timer tick did to the playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still playing, now at the contained second
    Advanced(u32),
    /// Reached the end; stopped and rewound to zero
    Completed,
    /// Tick arrived while stopped
    Ignored,
}

/// Playback state machine: `Stopped(e)` / `Playing(e)` over a fixed duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    state: PlaybackState,
    duration_secs: u32,
}

impl Playback {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            state: PlaybackState::default(),
            duration_secs,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.state.elapsed_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Play from the current position, or pause keeping it.
    /// Returns whether the player is now playing.
    pub fn toggle_play(&mut self) -> bool {
        self.state.is_playing = !self.state.is_playing;
        debug!(
            playing = self.state.is_playing,
            elapsed = self.state.elapsed_secs,
            "playback toggled"
        );
        self.state.is_playing
    }

    /// Advance by one second. Hitting the duration stops and rewinds.
    pub fn tick(&mut self) -> Tick {
        if !self.state.is_playing {
            return Tick::Ignored;
        }
        let next = self.state.elapsed_secs.saturating_add(1);
        if next < self.duration_secs {
            self.state.elapsed_secs = next;
            Tick::Advanced(next)
        } else {
            self.state = PlaybackState::default();
            debug!(duration = self.duration_secs, "playback completed");
            Tick::Completed
        }
    }

    /// Fill fraction of the progress bar
    pub fn progress(&self) -> f64 {
        progress_fraction(self.state.elapsed_secs, self.duration_secs)
    }

    /// `"elapsed / duration"`, e.g. `"1:05 / 3:00"`
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.state.elapsed_secs),
            format_time(self.duration_secs)
        )
    }
}

/// `m:ss`
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / duration` clamped to `[0, 1]`; an empty duration reads as zero
pub fn progress_fraction(elapsed_secs: u32, duration_secs: u32) -> f64 {
    if duration_secs == 0 {
        return 0.0;
    }
    (f64::from(elapsed_secs) / f64::from(duration_secs)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0:00")]
    #[case(5, "0:05")]
    #[case(65, "1:05")]
    #[case(180, "3:00")]
    #[case(3599, "59:59")]
    #[case(3600, "60:00")]
    fn test_format_time(#[case] secs: u32, #[case] expected: &str) {
        assert_eq!(format_time(secs), expected);
    }

    #[rstest]
    #[case(0, 180, 0.0)]
    #[case(90, 180, 0.5)]
    #[case(180, 180, 1.0)]
    #[case(400, 180, 1.0)]
    #[case(10, 0, 0.0)]
    fn test_progress_fraction(#[case] elapsed: u32, #[case] duration: u32, #[case] expected: f64) {
        assert_eq!(progress_fraction(elapsed, duration), expected);
    }

    #[test]
    fn test_initial_state() {
        let playback = Playback::new(180);
        assert_eq!(playback.state(), PlaybackState::default());
        assert_eq!(playback.time_label(), "0:00 / 3:00");
    }

    #[test]
    fn test_tick_while_stopped_is_ignored() {
        let mut playback = Playback::new(180);
        assert_eq!(playback.tick(), Tick::Ignored);
        assert_eq!(playback.elapsed_secs(), 0);
    }

    #[test]
    fn test_pause_preserves_elapsed() {
        let mut playback = Playback::new(180);
        playback.toggle_play();
        for _ in 0..45 {
            playback.tick();
        }
        assert_eq!(
            playback.state(),
            PlaybackState {
                is_playing: true,
                elapsed_secs: 45
            }
        );

        assert!(!playback.toggle_play());
        assert_eq!(playback.elapsed_secs(), 45);
        assert_eq!(playback.tick(), Tick::Ignored);

        assert!(playback.toggle_play());
        assert_eq!(playback.tick(), Tick::Advanced(46));
    }

    #[test]
    fn test_completion_rewinds() {
        let mut playback = Playback::new(3);
        playback.toggle_play();

        assert_eq!(playback.tick(), Tick::Advanced(1));
        assert_eq!(playback.tick(), Tick::Advanced(2));
        assert_eq!(playback.tick(), Tick::Completed);
        assert_eq!(playback.state(), PlaybackState::default());
    }

    #[test]
    fn test_time_label_mid_playback() {
        let mut playback = Playback::new(180);
        playback.toggle_play();
        for _ in 0..65 {
            playback.tick();
        }
        assert_eq!(playback.time_label(), "1:05 / 3:00");
    }
}
