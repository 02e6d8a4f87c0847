use std::collections::BTreeSet;

use crate::config::CardConfig;

/// Offset of the decline button from its resting place (px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Offset {
    fn from(v: (f64, f64)) -> Self {
        Offset { x: v.0, y: v.1 }
    }
}

/// Everything the user can do to the page, plus the reveal timer firing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Decline button pressed; carries the freshly sampled jump target.
    Decline(Offset),
    Accept,
    Reveal(usize),
    Enlarge(usize),
    DismissOverlay,
}

/// Bounds the reducer checks actions against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub decline_limit: u32,
    pub photo_count: usize,
}

impl From<&CardConfig> for Limits {
    fn from(cfg: &CardConfig) -> Self {
        Limits {
            decline_limit: cfg.decline.limit,
            photo_count: cfg.photos.len(),
        }
    }
}

/// What changed after an action, so callers know whether to redraw or schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    None,
    Declined,
    Accepted,
    Revealed,
    Enlarged,
    Dismissed,
}

/// The whole mutable state of the page.
///
/// `decline_count` only grows and stops at the limit, `accepted` never flips
/// back, and `enlarged` always names a revealed photo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub decline_count: u32,
    pub decline_offset: Offset,
    pub accepted: bool,
    pub revealed: BTreeSet<usize>,
    pub enlarged: Option<usize>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action, limits: Limits) -> Change {
        match action {
            Action::Decline(offset) => {
                if self.accepted || self.decline_count >= limits.decline_limit {
                    return Change::None;
                }
                self.decline_count += 1;
                self.decline_offset = offset;
                Change::Declined
            }
            Action::Accept => {
                if self.accepted {
                    return Change::None;
                }
                self.accepted = true;
                Change::Accepted
            }
            Action::Reveal(i) => {
                if !self.accepted || i >= limits.photo_count || !self.revealed.insert(i) {
                    return Change::None;
                }
                Change::Revealed
            }
            Action::Enlarge(i) => {
                if !self.revealed.contains(&i) || self.enlarged == Some(i) {
                    return Change::None;
                }
                self.enlarged = Some(i);
                Change::Enlarged
            }
            Action::DismissOverlay => {
                if self.enlarged.take().is_none() {
                    return Change::None;
                }
                Change::Dismissed
            }
        }
    }

    pub fn is_revealed(&self, i: usize) -> bool {
        self.revealed.contains(&i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: Limits = Limits {
        decline_limit: 5,
        photo_count: 6,
    };

    fn accepted_with(revealed: &[usize]) -> InteractionState {
        let mut s = InteractionState::new();
        s.apply(Action::Accept, LIMITS);
        for &i in revealed {
            s.apply(Action::Reveal(i), LIMITS);
        }
        s
    }

    #[test]
    fn decline_counts_up_to_limit() {
        let mut s = InteractionState::new();
        for k in 1..=5 {
            let off = Offset::from((k as f64, -(k as f64)));
            assert_eq!(s.apply(Action::Decline(off), LIMITS), Change::Declined);
            assert_eq!(s.decline_count, k);
            assert_eq!(s.decline_offset, off);
        }
        let before = s.clone();
        assert_eq!(
            s.apply(Action::Decline(Offset::from((9.0, 9.0))), LIMITS),
            Change::None
        );
        assert_eq!(s, before);
    }

    #[test]
    fn accept_is_terminal_and_idempotent() {
        for declines in 0..=5 {
            let mut s = InteractionState::new();
            for _ in 0..declines {
                s.apply(Action::Decline(Offset::default()), LIMITS);
            }
            assert_eq!(s.apply(Action::Accept, LIMITS), Change::Accepted);
            assert!(s.accepted);
            let snapshot = s.clone();
            assert_eq!(s.apply(Action::Accept, LIMITS), Change::None);
            assert_eq!(s, snapshot);
            // declining after acceptance does nothing either
            assert_eq!(
                s.apply(Action::Decline(Offset::default()), LIMITS),
                Change::None
            );
            assert_eq!(s.decline_count, declines);
        }
    }

    #[test]
    fn reveal_requires_acceptance_and_valid_index() {
        let mut s = InteractionState::new();
        assert_eq!(s.apply(Action::Reveal(0), LIMITS), Change::None);
        s.apply(Action::Accept, LIMITS);
        assert_eq!(s.apply(Action::Reveal(0), LIMITS), Change::Revealed);
        assert_eq!(s.apply(Action::Reveal(0), LIMITS), Change::None);
        assert_eq!(s.apply(Action::Reveal(6), LIMITS), Change::None);
        assert_eq!(s.revealed.iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn enlarge_and_dismiss() {
        let mut s = accepted_with(&[0, 1, 2]);
        assert_eq!(s.apply(Action::Enlarge(2), LIMITS), Change::Enlarged);
        assert_eq!(s.enlarged, Some(2));
        assert_eq!(s.apply(Action::Enlarge(1), LIMITS), Change::Enlarged);
        assert_eq!(s.enlarged, Some(1));
        assert_eq!(s.apply(Action::DismissOverlay, LIMITS), Change::Dismissed);
        assert_eq!(s.enlarged, None);
        assert_eq!(s.apply(Action::DismissOverlay, LIMITS), Change::None);
    }

    #[test]
    fn hidden_photos_cannot_be_enlarged() {
        let mut s = accepted_with(&[0]);
        assert_eq!(s.apply(Action::Enlarge(3), LIMITS), Change::None);
        assert_eq!(s.apply(Action::Enlarge(17), LIMITS), Change::None);
        assert_eq!(s.enlarged, None);
    }
}
