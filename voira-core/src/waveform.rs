//! Decorative hero waveform

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One animated bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveBar {
    pub height_px: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
}

/// `count` bars with pseudo-random heights and pulse speeds. The same seed
/// always yields the same bars, so re-renders don't jump around.
pub fn waveform(count: usize, seed: u64) -> Vec<WaveBar> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| WaveBar {
            height_px: rng.gen_range(10.0..50.0),
            delay_secs: i as f32 * 0.1,
            duration_secs: rng.gen_range(0.8..1.2),
        })
        .collect()
}
