use crate::icon::glyph;
use dioxus::prelude::*;
use std::time::Duration;
use voira_core::content::{Speaker, TRANSCRIPT};
use voira_core::{Icon, PlayerConfig, PlayerController, Section, TaskHandle, Tick};

/// Spawned tick loop of the demo player
struct TickTask(Task);

impl TaskHandle for TickTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

type DemoPlayer = PlayerController<TickTask>;

#[cfg(target_arch = "wasm32")]
async fn sleep(period: Duration) {
    gloo_timers::future::sleep(period).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(period: Duration) {
    tokio::time::sleep(period).await;
}

/// Play or pause `player`. Starting spawns a tick loop in the current scope
/// whose handle the controller keeps; the loop ends on completion.
fn toggle_playback(mut player: Signal<DemoPlayer>) -> bool {
    let period = player.peek().tick_period();
    let mut ticker = player;
    player.write().toggle_play(move || {
        TickTask(spawn(async move {
            loop {
                sleep(period).await;
                if ticker.write().tick() == Tick::Completed {
                    break;
                }
            }
        }))
    })
}

/// Fake audio player: a progress bar that fills over the demo's duration.
#[component]
pub fn AudioPlayer(#[props(default)] config: PlayerConfig) -> Element {
    let player = use_signal(move || match DemoPlayer::new(config) {
        Ok(player) => player,
        Err(e) => {
            tracing::warn!("Invalid demo player config, using defaults: {e}");
            DemoPlayer::default()
        }
    });

    let toggle_play = move |_| {
        let playing = toggle_playback(player);
        tracing::debug!(playing, "demo player toggled");
    };

    let (time_label, fill_percent, playing) = {
        let ctrl = player.read();
        let playback = ctrl.playback();
        (
            playback.time_label(),
            playback.progress() * 100.0,
            playback.is_playing(),
        )
    };

    rsx! {
        div {
            class: "card player",
            div {
                class: "player-header",
                h4 { "Live Demo" }
                span { class: "small muted", "{time_label}" }
            }

            div {
                class: "progress-track",
                div { class: "progress-fill", style: "width: {fill_percent}%;" }
            }

            button {
                class: "btn btn-primary btn-block",
                onclick: toggle_play,
                if playing {
                    span { class: "icon", {glyph(Icon::Pause)} }
                    "Pause Demo"
                } else {
                    span { class: "icon", {glyph(Icon::Play)} }
                    "Play Demo"
                }
            }
        }
    }
}

fn speaker_class(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::Caller => "speaker caller",
        Speaker::Assistant => "speaker assistant",
    }
}

/// Demo section: the player next to the call transcript
#[component]
pub fn LiveDemo() -> Element {
    rsx! {
        section {
            id: Section::Demo.anchor(),
            class: "section section-alt",
            div {
                class: "container",
                h2 { class: "section-title", "Hear it in action" }
                div {
                    class: "grid grid-2 demo-grid",
                    div { class: "demo-sticky", AudioPlayer {} }

                    div {
                        class: "card transcript",
                        h3 { "Demo Transcript" }
                        for (i, line) in TRANSCRIPT.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "transcript-line",
                                span { class: speaker_class(line.speaker), {line.speaker.label()} }
                                p { "{line.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
