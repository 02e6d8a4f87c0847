use serde::{Deserialize, Serialize};

use crate::constants::{
    BACKGROUND_GLYPHS, BURST_GLYPHS, DECLINE_HALF_HEIGHT, DECLINE_HALF_WIDTH, DECLINE_LIMIT,
    PHOTO_TILTS_DEG, REVEAL_FIRST_MS, REVEAL_STEP_MS, RING_RADIUS_X, RING_RADIUS_Y,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid card json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("card has no photos")]
    NoPhotos,
    #[error("card has no pleading labels for the decline button")]
    NoPleas,
    #[error("ring radii must be positive and wider than tall, got {0} x {1}")]
    BadRadius(f64, f64),
    #[error("decline limit must be at least 1")]
    BadLimit,
}

/// Where the decline button may jump and how many times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclineConfig {
    pub limit: u32,
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for DeclineConfig {
    fn default() -> Self {
        DeclineConfig {
            limit: DECLINE_LIMIT,
            half_width: DECLINE_HALF_WIDTH,
            half_height: DECLINE_HALF_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub radius_x: f64,
    pub radius_y: f64,
    /// Resting tilt per photo (deg); missing entries mean no tilt.
    pub tilts: Vec<f64>,
}

impl Default for RingConfig {
    fn default() -> Self {
        RingConfig {
            radius_x: RING_RADIUS_X,
            radius_y: RING_RADIUS_Y,
            tilts: PHOTO_TILTS_DEG.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub first_ms: u32,
    pub step_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            first_ms: REVEAL_FIRST_MS,
            step_ms: REVEAL_STEP_MS,
        }
    }
}

/// Everything that makes one card different from another: text, assets and
/// the few layout knobs. Every field has a default so partial files work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub recipient: String,
    pub question: Vec<String>,
    pub accept_label: String,
    pub coax_label: String,
    pub decline_label: String,
    pub pleas: Vec<String>,
    pub heading: String,
    pub subtitle: String,
    pub photos: Vec<String>,
    pub teddy: String,
    pub placeholder: String,
    pub background_glyphs: usize,
    pub burst_glyphs: usize,
    pub decline: DeclineConfig,
    pub ring: RingConfig,
    pub reveal: RevealConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            recipient: "Divyanshi".to_string(),
            question: vec!["Would you be".to_string(), "my Valentine?".to_string()],
            accept_label: "Yessss!! 💖".to_string(),
            coax_label: "Boht hogya tera No. Chalo ab yahan click kro. Krdooo naaa pleaseee 🥺"
                .to_string(),
            decline_label: "No 😅".to_string(),
            pleas: vec![
                "You sure? 🥺".to_string(),
                "Pretty please? 💕".to_string(),
                "Think again... 🤔".to_string(),
                "Are you really sure? 😢".to_string(),
            ],
            heading: "Yayyy!!".to_string(),
            subtitle: "I love you soo much!!".to_string(),
            photos: vec![
                "photos/photo1.jpeg".to_string(),
                "photos/photo2.jpg".to_string(),
                "photos/photo3.jpeg".to_string(),
                "photos/photo4.jpg".to_string(),
                "photos/photo8.jpeg".to_string(),
                "photos/photo7.jpg".to_string(),
            ],
            teddy: "images/TeddyBearGIF.gif".to_string(),
            placeholder: "placeholder.jpg".to_string(),
            background_glyphs: BACKGROUND_GLYPHS,
            burst_glyphs: BURST_GLYPHS,
            decline: DeclineConfig::default(),
            ring: RingConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a card document.
    pub fn from_json(text: &str) -> Result<CardConfig, ConfigError> {
        let cfg: CardConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.photos.is_empty() {
            return Err(ConfigError::NoPhotos);
        }
        if self.pleas.is_empty() {
            return Err(ConfigError::NoPleas);
        }
        let (rx, ry) = (self.ring.radius_x, self.ring.radius_y);
        if !(ry > 0.0 && rx > ry) {
            return Err(ConfigError::BadRadius(rx, ry));
        }
        if self.decline.limit == 0 {
            return Err(ConfigError::BadLimit);
        }
        Ok(())
    }

    /// Heading lines of the prompt; the recipient is addressed on the first one.
    pub fn title_lines(&self) -> Vec<String> {
        let mut lines = self.question.clone();
        match lines.first_mut() {
            Some(first) if !self.recipient.is_empty() => {
                *first = format!("{}, {}", self.recipient, first);
            }
            None if !self.recipient.is_empty() => lines.push(self.recipient.clone()),
            _ => {}
        }
        lines
    }
}
