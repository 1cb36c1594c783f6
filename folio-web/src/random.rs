//! Browser-backed filter randomness

use folio_core::RandomSource;

/// Draws from `Math.random()`; only usable inside a browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
