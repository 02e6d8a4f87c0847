//! Page-wide numeric constants.
//! Lengths are CSS pixels, times are milliseconds unless noted otherwise.

/// Number of drifting hearts in the page background.
pub const BACKGROUND_GLYPHS: usize = 25;
/// Number of hearts in the repeating celebration burst.
pub const BURST_GLYPHS: usize = 20;

/// Smallest and largest background heart size (px).
pub const GLYPH_SIZE_MIN: f64 = 40.0;
pub const GLYPH_SIZE_MAX: f64 = 120.0;
/// Background hearts are tilted within +/- this angle (deg).
pub const GLYPH_TILT_DEG: f64 = 30.0;

/// The decline control disappears after this many activations.
pub const DECLINE_LIMIT: u32 = 5;
/// Half extents of the box the decline control may jump within (px).
pub const DECLINE_HALF_WIDTH: f64 = 150.0;
pub const DECLINE_HALF_HEIGHT: f64 = 80.0;

/// Delay before the first photo appears after acceptance.
pub const REVEAL_FIRST_MS: u32 = 500;
/// Gap between two consecutive photo reveals.
pub const REVEAL_STEP_MS: u32 = 400;

/// Ellipse radii for the photo ring (px). Wider than tall to fit landscape screens.
pub const RING_RADIUS_X: f64 = 420.0;
pub const RING_RADIUS_Y: f64 = 280.0;

/// Resting tilt of each photo on the ring (deg), indexed by photo.
pub const PHOTO_TILTS_DEG: [f64; 6] = [-8.0, 5.0, -5.0, 8.0, -6.0, 6.0];

/// Burst heart timing (s).
pub const BURST_DURATION_S: f64 = 3.0;
pub const BURST_STAGGER_S: f64 = 0.1;
pub const BURST_PAUSE_S: f64 = 2.0;
