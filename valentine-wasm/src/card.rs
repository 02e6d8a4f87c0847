use valentine_core::CardConfig;
use web_sys::Window;

use crate::utils::{fetch_asset_text, get_query_param, log, warn};

/// The card compiled into the binary. Falls back to the built-in defaults if
/// the bundled file does not validate.
pub fn embedded_card() -> CardConfig {
    match CardConfig::from_json(include_str!("../../card.json")) {
        Ok(card) => card,
        Err(e) => {
            warn(&format!("bundled card.json rejected: {e}"));
            CardConfig::default()
        }
    }
}

fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Resolve the card for this page load. `?card=<name>` swaps in
/// `cards/<name>.json`; anything that fails keeps the bundled card.
pub async fn load_card(window: &Window, search: &str) -> CardConfig {
    let Some(name) = get_query_param(search, "card") else {
        return embedded_card();
    };
    if !is_safe_name(&name) {
        warn(&format!("ignoring card name {name:?}"));
        return embedded_card();
    }
    let text = fetch_asset_text(window, &format!("cards/{}.json", name)).await;
    match text.map(|t| CardConfig::from_json(&t)) {
        Some(Ok(card)) => {
            log(&format!("loaded card '{}'", name));
            card
        }
        Some(Err(e)) => {
            warn(&format!("card '{}' rejected: {}", name, e));
            embedded_card()
        }
        None => {
            warn(&format!("card '{}' not found", name));
            embedded_card()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_names() {
        assert!(is_safe_name("anniversary"));
        assert!(is_safe_name("trip_2025-rome"));
        assert!(!is_safe_name(""));
        assert!(!is_safe_name("../secret"));
        assert!(!is_safe_name("a/b"));
    }
}
