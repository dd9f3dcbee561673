//! Integration tests for voira-core

use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use voira_core::content::FAQ;
use voira_core::*;

/// Tick task backed by a real tokio timer
struct AbortOnCancel(JoinHandle<()>);

impl TaskHandle for AbortOnCancel {
    fn cancel(self) {
        self.0.abort();
    }
}

type SharedPlayer = Arc<Mutex<PlayerController<AbortOnCancel>>>;

fn shared_player(config: PlayerConfig) -> SharedPlayer {
    Arc::new(Mutex::new(PlayerController::new(config).unwrap()))
}

/// Same wiring the UI does: each start spawns a loop that ticks once per period
fn toggle(player: &SharedPlayer) -> bool {
    let ticker = Arc::clone(player);
    let mut guard = player.lock().unwrap();
    let period = guard.tick_period();
    guard.toggle_play(move || {
        AbortOnCancel(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if ticker.lock().unwrap().tick() == Tick::Completed {
                    break;
                }
            }
        }))
    })
}

fn state(player: &SharedPlayer) -> PlaybackState {
    player.lock().unwrap().playback().state()
}

/// Full uninterrupted run ends back at `Stopped(0)`
#[test]
fn test_full_run_auto_resets() {
    let mut playback = Playback::new(180);
    playback.toggle_play();
    assert_eq!(
        playback.state(),
        PlaybackState {
            is_playing: true,
            elapsed_secs: 0
        }
    );

    let ticks: Vec<Tick> = (0..180).map(|_| playback.tick()).collect();

    assert_eq!(ticks[178], Tick::Advanced(179));
    assert_eq!(ticks[179], Tick::Completed);
    assert_eq!(playback.state(), PlaybackState::default());
    assert_eq!(format_time(180), "3:00");
    assert_eq!(format_time(playback.elapsed_secs()), "0:00");
}

/// Progress and label at the documented checkpoints
#[test]
fn test_display_checkpoints() {
    let mut playback = Playback::new(180);
    playback.toggle_play();
    for _ in 0..65 {
        playback.tick();
    }
    assert_eq!(playback.time_label(), "1:05 / 3:00");

    for _ in 65..90 {
        playback.tick();
    }
    assert_eq!(playback.progress(), 0.5);
}

/// One accordion entry per FAQ record, toggled independently
#[test]
fn test_faq_accordion() {
    let mut panels = DisclosureSet::closed(FAQ.len());

    panels.toggle(0);
    panels.toggle(5);

    let open: Vec<usize> = (0..FAQ.len()).filter(|&i| panels.is_open(i)).collect();
    assert_eq!(open, vec![0, 5]);
}

/// Pausing and resuming over and over never stacks timers
#[tokio::test(start_paused = true)]
async fn test_pause_resume_does_not_leak_timers() {
    let player = shared_player(PlayerConfig::default());

    assert!(toggle(&player));
    tokio::time::sleep(Duration::from_millis(10_500)).await;
    assert_eq!(state(&player).elapsed_secs, 10);

    for _ in 0..5 {
        assert!(!toggle(&player));
        assert!(toggle(&player));
    }

    tokio::time::sleep(Duration::from_millis(5_200)).await;
    assert_eq!(
        state(&player),
        PlaybackState {
            is_playing: true,
            elapsed_secs: 15
        }
    );
    assert!(player.lock().unwrap().has_task());
}

/// Elapsed time is frozen while paused
#[tokio::test(start_paused = true)]
async fn test_pause_freezes_progress() {
    let player = shared_player(PlayerConfig::default());

    toggle(&player);
    tokio::time::sleep(Duration::from_millis(45_500)).await;
    assert!(!toggle(&player));
    assert_eq!(state(&player).elapsed_secs, 45);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(state(&player).elapsed_secs, 45);
    assert!(!player.lock().unwrap().has_task());

    assert!(toggle(&player));
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(state(&player).elapsed_secs, 46);
}

/// Completion stops the timer on its own
#[tokio::test(start_paused = true)]
async fn test_completion_stops_timer() {
    let player = shared_player(
        PlayerConfig::new()
            .with_duration_secs(5)
            .with_tick_period(Duration::from_millis(100)),
    );

    toggle(&player);
    tokio::time::sleep(Duration::from_millis(550)).await;
    assert_eq!(state(&player), PlaybackState::default());
    assert!(!player.lock().unwrap().has_task());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(state(&player), PlaybackState::default());
}
