use crate::scroll::scroll_to;
use dioxus::prelude::*;
use voira_core::content::{BRAND, HERO_PITCH, TAGLINE};
use voira_core::{waveform, Section};

const WAVEFORM_BARS: usize = 20;
const WAVEFORM_SEED: u64 = 0x7258d8;

#[component]
pub fn Hero() -> Element {
    let bars = use_hook(|| waveform(WAVEFORM_BARS, WAVEFORM_SEED));

    rsx! {
        section {
            id: "hero",
            div {
                class: "container hero-inner",
                h1 {
                    class: "hero-title",
                    div { "{BRAND}" }
                    div { class: "muted", "{TAGLINE}" }
                }
                p { class: "hero-pitch", "{HERO_PITCH}" }

                div {
                    class: "cta-row",
                    button { class: "btn btn-primary btn-lg", "Try {BRAND}" }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| scroll_to(Section::Demo),
                        "Watch 60-sec demo"
                    }
                }

                // Decorative only
                div {
                    class: "waveform",
                    for (i, bar) in bars.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "wave-bar",
                            style: "height: {bar.height_px}px; animation-delay: {bar.delay_secs}s; animation-duration: {bar.duration_secs}s;",
                        }
                    }
                }
            }
        }
    }
}
