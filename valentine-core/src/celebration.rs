use std::collections::BTreeSet;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::{RevealConfig, RingConfig};
use crate::decoration::Motion;

/// One entry of the reveal sequence: show photo `index` after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub delay_ms: u32,
    pub index: usize,
}

/// The photo reveal timetable, sorted by delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSchedule {
    steps: Vec<RevealStep>,
}

impl RevealSchedule {
    pub fn new(photo_count: usize, timing: &RevealConfig) -> Self {
        let steps = (0..photo_count)
            .map(|index| RevealStep {
                delay_ms: timing
                    .first_ms
                    .saturating_add(timing.step_ms.saturating_mul(index as u32)),
                index,
            })
            .collect();
        RevealSchedule { steps }
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Photos that are visible `t_ms` after acceptance.
    pub fn revealed_at(&self, t_ms: u32) -> BTreeSet<usize> {
        self.steps
            .iter()
            .take_while(|s| s.delay_ms <= t_ms)
            .map(|s| s.index)
            .collect()
    }
}

/// Resting place of one photo relative to the viewport centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoSlot {
    pub index: usize,
    /// Angle on the ellipse in radians; 0 is the top, growing clockwise on screen.
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    pub tilt_deg: f64,
    pub motion: Motion,
}

pub fn ring_angle(index: usize, count: usize) -> f64 {
    (index as f64 / count as f64) * TAU - FRAC_PI_2
}

pub fn photo_slot(index: usize, count: usize, ring: &RingConfig) -> PhotoSlot {
    let angle = ring_angle(index, count);
    PhotoSlot {
        index,
        angle,
        x: ring.radius_x * angle.cos(),
        y: ring.radius_y * angle.sin(),
        tilt_deg: ring.tilts.get(index).copied().unwrap_or(0.0),
        motion: Motion {
            duration_s: 5.0 + (index % 3) as f64,
            delay_s: index as f64 * 0.5,
        },
    }
}

/// Slots for all photos in order.
pub fn ring_layout(count: usize, ring: &RingConfig) -> Vec<PhotoSlot> {
    (0..count).map(|i| photo_slot(i, count, ring)).collect()
}
