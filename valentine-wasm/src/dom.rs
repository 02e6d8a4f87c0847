use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::utils::{asset_url, warn};

/// Create an element with the given class list.
pub fn element(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = doc.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub fn toggle_class(el: &HtmlElement, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

const HEART_PATH: &str = "M23.6,0c-3.4,0-6.3,2.7-7.6,5.6C14.7,2.7,11.8,0,8.4,0C3.8,0,0,3.8,0,8.4c0,9.4,9.5,11.9,16,21.2c6.1-9.3,16-12.1,16-21.2C32,3.8,28.2,0,23.6,0z";

/// Inline SVG heart sized to the surrounding font size.
pub fn heart_svg(fill: &str, opacity: f64) -> String {
    format!(
        r#"<svg viewBox="0 0 32 29.6" fill="{fill}" fill-opacity="{opacity}" style="width:1em;height:1em"><path d="{HEART_PATH}"/></svg>"#
    )
}

/// An `<img>` that swaps to `placeholder` once if its source fails to load.
/// The returned listener must be kept alive as long as the image.
pub fn image_with_fallback(
    doc: &Document,
    class: &str,
    src: &str,
    alt: &str,
    placeholder: &str,
) -> Result<(HtmlImageElement, EventListener), JsValue> {
    let img = doc.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    img.set_class_name(class);
    img.set_alt(alt);
    let fallback = attach_image_fallback(&img, placeholder);
    img.set_src(&asset_url(src));
    Ok((img, fallback))
}

pub fn attach_image_fallback(img: &HtmlImageElement, placeholder: &str) -> EventListener {
    let target = img.clone();
    let placeholder = asset_url(placeholder);
    EventListener::once(img, "error", move |_| {
        warn(&format!("image {} failed, using placeholder", target.src()));
        target.set_src(&placeholder);
    })
}
