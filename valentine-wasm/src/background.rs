use rand::Rng;
use valentine_core::{generate_glyphs, heart_color};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom::{element, heart_svg, set_style};

/// Fill `layer` with drifting watermark hearts. Runs once at mount.
pub fn mount<R: Rng + ?Sized>(
    doc: &Document,
    layer: &HtmlElement,
    count: usize,
    rng: &mut R,
) -> Result<(), JsValue> {
    for g in generate_glyphs(count, rng) {
        // the outer box carries the static tilt, the inner one loops
        let slot = element(doc, "div", "float-heart")?;
        set_style(&slot, "left", &format!("{:.3}%", g.left));
        set_style(&slot, "top", &format!("{:.3}%", g.top));
        set_style(&slot, "font-size", &format!("{:.1}px", g.size));
        set_style(&slot, "transform", &format!("rotate({:.2}deg)", g.rotation));

        let motion = g.motion();
        let inner = element(doc, "div", "float-heart-inner")?;
        set_style(&inner, "animation-duration", &format!("{}s", motion.duration_s));
        set_style(&inner, "animation-delay", &format!("{:.1}s", motion.delay_s));
        inner.set_inner_html(&heart_svg(heart_color(false), 0.25));

        slot.append_child(&inner)?;
        layer.append_child(&slot)?;
    }
    Ok(())
}
