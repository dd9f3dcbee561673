use crate::icon::glyph;
use dioxus::prelude::*;
use voira_core::content::FAQ;
use voira_core::{DisclosureSet, Icon, Section};

/// FAQ accordion. Each entry opens and closes on its own.
#[component]
pub fn Faq() -> Element {
    let mut panels = use_signal(|| DisclosureSet::closed(FAQ.len()));

    rsx! {
        section {
            id: Section::Faq.anchor(),
            class: "section",
            div {
                class: "container narrow",
                h2 { class: "section-title", "Frequently Asked Questions" }
                for (index, entry) in FAQ.iter().enumerate() {
                    FaqItem {
                        key: "{index}",
                        question: entry.question,
                        answer: entry.answer,
                        is_open: panels.read().is_open(index),
                        on_toggle: move |_| {
                            panels.write().toggle(index);
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn FaqItem(
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    let chevron_class = if is_open { "chevron open" } else { "chevron" };

    rsx! {
        div {
            class: "faq-item",
            button {
                class: "faq-question",
                aria_expanded: is_open,
                onclick: move |_| on_toggle.call(()),
                span { "{question}" }
                span { class: chevron_class, {glyph(Icon::ChevronDown)} }
            }
            if is_open {
                div { class: "faq-answer", "{answer}" }
            }
        }
    }
}
