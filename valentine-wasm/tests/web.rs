#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use valentine_core::{Action, CardConfig};
use valentine_wasm::state::State;
use valentine_wasm::{draw, mount, teardown};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_page() -> Rc<RefCell<State>> {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    if document.get_element_by_id("app").is_none() {
        let app = document.create_element("div").unwrap();
        app.set_id("app");
        document.body().unwrap().append_child(&app).unwrap();
    }
    mount(window, CardConfig::default(), 7).unwrap()
}

fn query(state: &Rc<RefCell<State>>, selector: &str) -> Option<HtmlElement> {
    state
        .borrow()
        .document
        .query_selector(selector)
        .unwrap()
        .map(|e| e.dyn_into::<HtmlElement>().unwrap())
}

/// Fire a real (bubbling) click and flush the redraw it requested.
fn click(state: &Rc<RefCell<State>>, selector: &str) {
    query(state, selector)
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .click();
    draw(&mut state.borrow_mut()).unwrap();
}

fn act(state: &Rc<RefCell<State>>, action: Action) {
    let mut s = state.borrow_mut();
    s.dispatch(action);
    draw(&mut s).unwrap();
}

#[wasm_bindgen_test]
fn prompt_renders_title_and_buttons() {
    let page = fresh_page();
    assert!(query(&page, ".heart-card .lobe-left").is_some());
    assert!(query(&page, ".heart-card .lobe-right").is_some());
    let question = query(&page, ".question").unwrap();
    assert_eq!(question.inner_html().matches("<br>").count(), 1);
    let text = question.text_content().unwrap_or_default();
    assert!(text.contains("Divyanshi, Would you be"), "title = {text}");
    assert!(text.contains("my Valentine?"), "title = {text}");
    assert_eq!(query(&page, ".btn-accept").unwrap().inner_text(), "Yessss!! 💖");
    assert_eq!(query(&page, ".btn-decline").unwrap().inner_text(), "No 😅");
    teardown();
}

#[wasm_bindgen_test]
fn decline_clicks_exhaust_the_button() {
    let page = fresh_page();
    for k in 1..=5u32 {
        click(&page, ".btn-decline");
        assert_eq!(page.borrow().ui.decline_count, k);
    }
    assert!(query(&page, ".btn-decline").is_none());
    assert_eq!(
        query(&page, ".btn-accept").unwrap().inner_text(),
        CardConfig::default().coax_label
    );
    teardown();
}

#[wasm_bindgen_test]
fn clicks_drive_the_overlay() {
    let page = fresh_page();
    click(&page, ".btn-accept");
    assert!(page.borrow().ui.accepted);
    assert!(query(&page, ".celebration").is_some());

    act(&page, Action::Reveal(1));
    click(&page, ".photo-slot");
    assert_eq!(page.borrow().ui.enlarged, Some(1));

    // the card swallows its clicks, so the overlay stays open
    click(&page, ".overlay-card");
    assert_eq!(page.borrow().ui.enlarged, Some(1));
    assert!(query(&page, ".overlay:not(.leaving)").is_some());

    click(&page, ".overlay");
    assert_eq!(page.borrow().ui.enlarged, None);
    assert!(query(&page, ".overlay.leaving").is_some());
    teardown();
}

#[wasm_bindgen_test]
fn teardown_releases_the_page() {
    let page = fresh_page();
    page.borrow_mut().dispatch(Action::Accept);
    assert!(page.borrow().frame.is_some());
    let weak = Rc::downgrade(&page);
    drop(page);
    teardown();
    assert!(weak.upgrade().is_none());
}

#[wasm_bindgen_test]
fn decline_button_runs_out() {
    let page = fresh_page();
    for k in 1..=5u32 {
        {
            let mut s = page.borrow_mut();
            s.decline();
            draw(&mut s).unwrap();
        }
        assert_eq!(page.borrow().ui.decline_count, k);
    }
    assert!(query(&page, ".btn-decline").is_none());
    let accept = query(&page, ".btn-accept").unwrap();
    assert_eq!(accept.inner_text(), CardConfig::default().coax_label);
    assert!(accept.class_list().contains("coax"));
    teardown();
}

#[wasm_bindgen_test]
fn accept_swaps_in_celebration() {
    let page = fresh_page();
    act(&page, Action::Accept);
    assert!(query(&page, ".celebration").is_some());
    assert!(query(&page, ".prompt.leaving").is_some());
    assert_eq!(page.borrow().reveal_timers.len(), 6);
    teardown();
}

#[wasm_bindgen_test]
fn overlay_opens_and_closes() {
    let page = fresh_page();
    act(&page, Action::Accept);
    act(&page, Action::Reveal(2));
    assert!(query(&page, ".photo-slot").is_some());

    act(&page, Action::Enlarge(2));
    let img = query(&page, ".overlay .photo-large")
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap();
    assert_eq!(img.alt(), "Photo 3");

    act(&page, Action::DismissOverlay);
    assert_eq!(page.borrow().ui.enlarged, None);
    assert!(query(&page, ".overlay.leaving").is_some());
    teardown();
}

#[wasm_bindgen_test]
fn broken_photo_shows_placeholder() {
    let page = fresh_page();
    act(&page, Action::Accept);
    act(&page, Action::Reveal(0));
    let before = page.borrow().ui.clone();

    let img = query(&page, ".photo-slot .photo")
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap();
    img.dispatch_event(&Event::new("error").unwrap()).unwrap();
    assert!(img.src().ends_with("/placeholder.jpg"), "src = {}", img.src());

    // only swapped once, so a broken placeholder cannot loop
    img.set_src("elsewhere.png");
    img.dispatch_event(&Event::new("error").unwrap()).unwrap();
    assert!(img.src().ends_with("elsewhere.png"));

    assert_eq!(page.borrow().ui, before);
    teardown();
}
