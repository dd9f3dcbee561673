//! Voira Core Library
//!
//! Framework-free state and content behind the Voira landing page: the FAQ
//! disclosure toggles, the simulated demo player and the literal copy tables
//! the UI renders.

pub mod config;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod playback;
pub mod section;
pub mod ticker;
pub mod waveform;

pub use config::PlayerConfig;
pub use content::Icon;
pub use disclosure::{Disclosure, DisclosureSet};
pub use error::{LandingError, Result};
pub use playback::{format_time, progress_fraction, Playback, PlaybackState, Tick};
pub use section::Section;
pub use ticker::{PlayerController, TaskHandle};
pub use waveform::{waveform, WaveBar};
