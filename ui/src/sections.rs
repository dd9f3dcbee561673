//! Static sections rendered straight from the content tables

use crate::icon::glyph;
use dioxus::prelude::*;
use voira_core::content::{
    Pitch, BENEFITS, BRAND, CTA_BODY, CTA_HEADLINE, INTEGRATIONS, INTEGRATIONS_SUMMARY, PROBLEM,
    SOLUTION, STEPS, TRUST_PILLARS, USE_CASES, USE_CASES_INTRO,
};
use voira_core::{Icon, Section};

#[component]
pub fn WhoItsFor() -> Element {
    rsx! {
        section {
            id: Section::WhoItsFor.anchor(),
            class: "section section-alt",
            div {
                class: "container",
                h2 { class: "section-title", "Who {BRAND} is for" }
                p { class: "section-lead", "{USE_CASES_INTRO}" }
                div {
                    class: "grid grid-6",
                    for case in USE_CASES {
                        div {
                            key: "{case.title}",
                            class: "use-case",
                            div { class: "icon-tile", {glyph(case.icon)} }
                            h3 { "{case.title}" }
                            p { class: "small muted", "{case.subtitle}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProblemSolution() -> Element {
    rsx! {
        section {
            class: "section",
            div {
                class: "container grid grid-2",
                PitchColumn { pitch: PROBLEM, accent: "rule rule-problem" }
                PitchColumn { pitch: SOLUTION, accent: "rule rule-solution" }
            }
        }
    }
}

#[component]
fn PitchColumn(pitch: Pitch, accent: &'static str) -> Element {
    rsx! {
        div {
            class: "pitch",
            h2 { "{pitch.headline}" }
            div { class: accent }
            p { class: "muted", "{pitch.body}" }
        }
    }
}

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section {
            id: Section::HowItWorks.anchor(),
            class: "section section-alt",
            div {
                class: "container",
                h2 { class: "section-title", "How it works in 3 steps" }
                div {
                    class: "grid grid-3",
                    for step in STEPS {
                        div {
                            key: "{step.step}",
                            class: "step",
                            div { class: "icon-tile icon-tile-solid", {glyph(step.icon)} }
                            h3 { "{step.step}" }
                            h4 { "{step.title}" }
                            p { class: "muted", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Benefits() -> Element {
    rsx! {
        section {
            id: Section::Benefits.anchor(),
            class: "section",
            div {
                class: "container",
                h2 { class: "section-title", "Your expert on the line" }
                div {
                    class: "grid grid-4",
                    for benefit in BENEFITS {
                        div {
                            key: "{benefit.title}",
                            class: "benefit",
                            div { class: "icon-tile icon-tile-soft", {glyph(Icon::CheckCircle)} }
                            h3 { "{benefit.title}" }
                            p { class: "small muted", "{benefit.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrustPrivacy() -> Element {
    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                h2 { class: "section-title", "Trust & Privacy by Design" }
                div {
                    class: "grid grid-2",
                    for pillar in TRUST_PILLARS {
                        div {
                            key: "{pillar.title}",
                            class: "pillar",
                            div { class: "icon-tile icon-tile-soft", {glyph(pillar.icon)} }
                            div {
                                h3 { "{pillar.title}" }
                                p { class: "muted", "{pillar.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Integrations() -> Element {
    rsx! {
        section {
            class: "section section-alt",
            div {
                class: "container",
                h2 { class: "section-title", "Integrates with your workflow" }
                p { class: "section-lead", "{INTEGRATIONS_SUMMARY}" }
                div {
                    class: "integrations",
                    for name in INTEGRATIONS {
                        div { key: "{name}", class: "integration", "{name}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FinalCta() -> Element {
    rsx! {
        section {
            class: "section section-brand",
            div {
                class: "container narrow centered",
                h2 { "{CTA_HEADLINE}" }
                p { class: "cta-body", "{CTA_BODY}" }
                div {
                    class: "cta-row",
                    button { class: "btn btn-inverse btn-lg", "Start now" }
                    button { class: "btn btn-ghost btn-lg", "Book a demo" }
                }
            }
        }
    }
}
