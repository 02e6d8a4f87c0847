use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

/// Base path the host page serves assets from (`window.__BASE_URL`, default `/`).
fn base_url() -> String {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("__BASE_URL")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "/".to_string())
}

fn is_absolute(path: &str) -> bool {
    ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
}

/// Resolve a card-relative asset path against the page base.
pub fn asset_url(path: &str) -> String {
    let path = path.trim();
    if is_absolute(path) {
        return path.to_string();
    }
    join_base(&base_url(), path)
}

fn join_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Where to look for `path`: under the page base first, then at the site
/// root, then relative to the document. Duplicates are skipped.
fn asset_candidates(base: &str, path: &str) -> Vec<String> {
    let path = path.trim();
    if is_absolute(path) {
        return vec![path.to_string()];
    }
    let mut out: Vec<String> = Vec::new();
    for url in [
        join_base(base, path),
        join_base("", path),
        path.trim_start_matches('/').to_string(),
    ] {
        if !out.contains(&url) {
            out.push(url);
        }
    }
    out
}

/// Fetch a text asset, trying each candidate location until one answers 2xx.
pub async fn fetch_asset_text(window: &Window, path: &str) -> Option<String> {
    for url in asset_candidates(&base_url(), path) {
        let Ok(resp) = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(&url)).await
        else {
            continue;
        };
        let Ok(resp) = resp.dyn_into::<web_sys::Response>() else {
            continue;
        };
        if !resp.ok() {
            log(&format!("{} answered {}", url, resp.status()));
            continue;
        }
        if let Ok(body) = resp.text()
            && let Ok(text) = wasm_bindgen_futures::JsFuture::from(body).await
            && let Some(text) = text.as_string()
        {
            return Some(text);
        }
    }
    None
}

/// Value of `key` in a `?a=b&c=d` query string, percent-decoded.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| url_decode(v))
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

/// Seed for the page RNG: `?seed=<n>` when given, otherwise `Math.random`.
pub fn pick_seed(search: &str) -> u64 {
    get_query_param(search, "seed")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or_else(|| (js_sys::Math::random() * (1u64 << 53) as f64) as u64)
}
