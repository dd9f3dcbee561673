use crate::navbar::Brand;
use dioxus::prelude::*;
use voira_core::content::{COPYRIGHT, MAKER_NAME, MAKER_URL};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            id: "footer",
            div {
                class: "container centered",
                Brand { light: true }
                div {
                    class: "footer-text",
                    p { "{COPYRIGHT}" }
                    p {
                        class: "small",
                        "A product by "
                        a {
                            href: MAKER_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{MAKER_NAME}"
                        }
                    }
                }
            }
        }
    }
}
