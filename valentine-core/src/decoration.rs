use rand::Rng;

use crate::constants::{
    BURST_DURATION_S, BURST_PAUSE_S, BURST_STAGGER_S, GLYPH_SIZE_MAX, GLYPH_SIZE_MIN,
    GLYPH_TILT_DEG,
};

/// A background heart. Positions are percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorativeGlyph {
    pub id: usize,
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub rotation: f64,
}

/// Looping animation parameters, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub duration_s: f64,
    pub delay_s: f64,
}

impl DecorativeGlyph {
    /// Phase and period are derived from the index so neighbours drift out of step.
    pub fn motion(&self) -> Motion {
        Motion {
            duration_s: 6.0 + (self.id % 4) as f64,
            delay_s: self.id as f64 * 0.3,
        }
    }
}

/// Scatter `count` hearts across the viewport.
pub fn generate_glyphs<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<DecorativeGlyph> {
    (0..count)
        .map(|id| DecorativeGlyph {
            id,
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            size: rng.random_range(GLYPH_SIZE_MIN..GLYPH_SIZE_MAX),
            rotation: rng.random_range(-GLYPH_TILT_DEG..GLYPH_TILT_DEG),
        })
        .collect()
}

/// One heart of the celebration burst. It grows out of the centre, drifts to
/// `target` (viewport percentages) and fades, then waits and starts over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstGlyph {
    pub id: usize,
    pub target: (f64, f64),
    pub motion: Motion,
    pub pause_s: f64,
}

pub fn generate_burst<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<BurstGlyph> {
    (0..count)
        .map(|id| BurstGlyph {
            id,
            target: (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)),
            motion: Motion {
                duration_s: BURST_DURATION_S,
                delay_s: id as f64 * BURST_STAGGER_S,
            },
            pause_s: BURST_PAUSE_S,
        })
        .collect()
}
