//! This crate contains all shared UI for the workspace.

mod icon;
mod scroll;

mod faq;
pub use faq::{Faq, FaqItem};

mod footer;
pub use footer::Footer;

mod hero;
pub use hero::Hero;

mod landing;
pub use landing::LandingPage;

mod navbar;
pub use navbar::Navbar;

mod player;
pub use player::{AudioPlayer, LiveDemo};

mod sections;
pub use sections::{
    Benefits, FinalCta, HowItWorks, Integrations, ProblemSolution, TrustPrivacy, WhoItsFor,
};

pub use scroll::scroll_to;
