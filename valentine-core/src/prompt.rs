use rand::Rng;

use crate::config::{CardConfig, DeclineConfig};
use crate::state::{InteractionState, Offset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptState {
    /// The decline button is still on screen.
    Idle,
    /// The decline button is gone for good.
    Exhausted,
}

pub fn prompt_state(state: &InteractionState, decline: &DeclineConfig) -> PromptState {
    if state.decline_count >= decline.limit {
        PromptState::Exhausted
    } else {
        PromptState::Idle
    }
}

/// New jump target for the decline button, uniform in the configured box and
/// independent of where it was before.
pub fn sample_offset<R: Rng + ?Sized>(rng: &mut R, decline: &DeclineConfig) -> Offset {
    Offset {
        x: (rng.random::<f64>() - 0.5) * decline.half_width * 2.0,
        y: (rng.random::<f64>() - 0.5) * decline.half_height * 2.0,
    }
}

pub fn accept_label<'a>(state: &InteractionState, cfg: &'a CardConfig) -> &'a str {
    match prompt_state(state, &cfg.decline) {
        PromptState::Idle => &cfg.accept_label,
        PromptState::Exhausted => &cfg.coax_label,
    }
}

pub fn decline_label<'a>(state: &InteractionState, cfg: &'a CardConfig) -> &'a str {
    if state.decline_count == 0 {
        return &cfg.decline_label;
    }
    // clamp: the button is gone before the list can run out
    let idx = (state.decline_count as usize - 1).min(cfg.pleas.len().saturating_sub(1));
    cfg.pleas
        .get(idx)
        .map(String::as_str)
        .unwrap_or(&cfg.decline_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, Limits};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn decline_n(n: u32, cfg: &CardConfig, rng: &mut SmallRng) -> InteractionState {
        let mut s = InteractionState::new();
        for _ in 0..n {
            let off = sample_offset(rng, &cfg.decline);
            s.apply(Action::Decline(off), Limits::from(cfg));
        }
        s
    }

    #[test]
    fn offsets_stay_in_box() {
        let cfg = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..1000 {
            let o = sample_offset(&mut rng, &cfg.decline);
            assert!(o.x >= -150.0 && o.x < 150.0, "x={}", o.x);
            assert!(o.y >= -80.0 && o.y < 80.0, "y={}", o.y);
        }
    }

    #[test]
    fn declines_move_button_within_bounds() {
        let cfg = CardConfig::default();
        for k in 0..5 {
            let mut rng = SmallRng::seed_from_u64(k as u64);
            let s = decline_n(k, &cfg, &mut rng);
            assert_eq!(s.decline_count, k);
            assert_eq!(prompt_state(&s, &cfg.decline), PromptState::Idle);
            if k == 0 {
                assert_eq!(s.decline_offset, Offset::default());
            } else {
                assert!(s.decline_offset.x.abs() <= 150.0);
                assert!(s.decline_offset.y.abs() <= 80.0);
            }
        }
    }

    #[test]
    fn labels_follow_decline_count() {
        let cfg = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let expected = [
            "No 😅",
            "You sure? 🥺",
            "Pretty please? 💕",
            "Think again... 🤔",
            "Are you really sure? 😢",
        ];
        for (k, want) in expected.iter().enumerate() {
            let s = decline_n(k as u32, &cfg, &mut rng);
            assert_eq!(decline_label(&s, &cfg), *want);
            assert_eq!(accept_label(&s, &cfg), "Yessss!! 💖");
        }
    }

    #[test]
    fn fifth_decline_exhausts_prompt() {
        let cfg = CardConfig::default();
        let mut rng = SmallRng::seed_from_u64(99);
        let s = decline_n(5, &cfg, &mut rng);
        assert_eq!(prompt_state(&s, &cfg.decline), PromptState::Exhausted);
        assert_eq!(accept_label(&s, &cfg), cfg.coax_label);
    }

    #[test]
    fn label_clamp_does_not_panic() {
        let cfg = CardConfig::default();
        let s = InteractionState {
            decline_count: 40,
            ..InteractionState::default()
        };
        assert_eq!(decline_label(&s, &cfg), "Are you really sure? 😢");
        let bare = CardConfig {
            pleas: Vec::new(),
            ..CardConfig::default()
        };
        assert_eq!(decline_label(&s, &bare), "No 😅");
    }
}
