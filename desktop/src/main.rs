use dioxus::prelude::*;
use ui::LandingPage;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        LandingPage {}
    }
}
