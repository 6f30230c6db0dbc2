//! Per-arc dash phase animation.
//!
//! Each rendered arc owns an independent dash offset that drifts by a
//! randomly chosen per-arc rate every frame, producing the marching-dashes
//! effect along connection arcs. This state is purely cosmetic: it lives
//! with the renderer, keyed by arc index, and never touches the immutable
//! arc geometry.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Slowest per-frame dash rate (1 per-thousand units per frame).
pub const MIN_DASH_RATE: f64 = 0.001;
/// Fastest per-frame dash rate (5 per-thousand units per frame).
pub const MAX_DASH_RATE: f64 = 0.005;

/// Dash state for a single arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPhase {
    /// Current dash offset; decreases every frame.
    pub offset: f64,
    /// Per-frame offset decrement, fixed at construction.
    pub rate: f64,
}

/// Advances every arc's dash offset once per rendered frame.
///
/// Rates are drawn from a seeded generator so two animators built with the
/// same `(arc_count, seed)` replay identically.
#[derive(Clone, Debug)]
pub struct DashAnimator {
    phases: Vec<DashPhase>,
    /// Whether ticking is suspended (e.g. while the host pauses rendering).
    pub paused: bool,
}

impl DashAnimator {
    /// Create one dash phase per arc, each with a random rate in
    /// `[MIN_DASH_RATE, MAX_DASH_RATE]`.
    #[must_use]
    pub fn new(arc_count: usize, seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let phases = (0..arc_count)
            .map(|_| DashPhase {
                offset: 0.0,
                rate: rng.gen_range(MIN_DASH_RATE..=MAX_DASH_RATE),
            })
            .collect();
        Self {
            phases,
            paused: false,
        }
    }

    /// Advance every phase by one frame.
    ///
    /// Call exactly once per rendered frame; each call shifts every offset
    /// down by that arc's rate.
    pub fn advance_frame(&mut self) {
        if self.paused {
            return;
        }
        for phase in &mut self.phases {
            phase.offset -= phase.rate;
        }
    }

    /// Dash offset for the arc at `index`.
    #[inline]
    #[must_use]
    pub fn offset(&self, index: usize) -> f64 {
        self.phases[index].offset
    }

    /// Dash state for the arc at `index`.
    #[inline]
    #[must_use]
    pub fn phase(&self, index: usize) -> DashPhase {
        self.phases[index]
    }

    /// Number of animated arcs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether no arcs are animated.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}
