use crate::{
    Benefits, Faq, FinalCta, Footer, Hero, HowItWorks, Integrations, LiveDemo, Navbar,
    ProblemSolution, TrustPrivacy, WhoItsFor,
};
use dioxus::prelude::*;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// The whole page, top to bottom
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        div {
            id: "landing",
            Navbar {}
            Hero {}
            WhoItsFor {}
            ProblemSolution {}
            HowItWorks {}
            Benefits {}
            LiveDemo {}
            TrustPrivacy {}
            Integrations {}
            Faq {}
            FinalCta {}
            Footer {}
        }
    }
}
