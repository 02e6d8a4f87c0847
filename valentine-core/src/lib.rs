//! Target independent model of the Valentine card: background decorations,
//! the prompt with its dodging decline button, and the photo celebration.
//! The browser front end lives in `valentine-wasm`.

pub mod celebration;
pub mod config;
pub mod constants;
pub mod decoration;
pub mod prompt;
pub mod state;

pub use celebration::{PhotoSlot, RevealSchedule, RevealStep, photo_slot, ring_angle, ring_layout};
pub use config::{CardConfig, ConfigError};
pub use decoration::{BurstGlyph, DecorativeGlyph, Motion, generate_burst, generate_glyphs};
pub use prompt::{PromptState, accept_label, decline_label, prompt_state, sample_offset};
pub use state::{Action, Change, InteractionState, Limits, Offset};

/// Fill colours of the two heart flavours: faint background watermark and the
/// solid celebration heart.
pub fn heart_color(solid: bool) -> &'static str {
    if solid { "#d6336c" } else { "#c9446d" }
}
