use crate::scroll::scroll_to;
use dioxus::prelude::*;
use voira_core::content::{BRAND, NAV_LINKS};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            id: "navbar",
            div {
                class: "container navbar-inner",
                Brand { light: false }

                div {
                    class: "nav-links",
                    for link in NAV_LINKS {
                        button {
                            key: "{link.label}",
                            class: "nav-link",
                            onclick: move |_| scroll_to(link.section),
                            "{link.label}"
                        }
                    }
                }

                button { class: "btn btn-primary", "Try {BRAND}" }
            }
        }
    }
}

/// Logo tile plus product name, shared by the navbar and the footer
#[component]
pub fn Brand(light: bool) -> Element {
    let name_class = if light { "brand-name light" } else { "brand-name" };

    rsx! {
        div {
            class: "brand",
            div { class: "brand-tile", span { "V" } }
            span { class: name_class, "{BRAND}" }
        }
    }
}
