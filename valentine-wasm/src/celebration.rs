use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use rand::Rng;
use valentine_core::{Action, PhotoSlot, RevealSchedule, generate_burst, heart_color, ring_layout};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom::{element, heart_svg, image_with_fallback, set_style, toggle_class};
use crate::state::{State, with_state};
use crate::utils::log;

/// Length of the overlay fade-out (ms), see `.overlay.leaving` in style.css.
const OVERLAY_EXIT_MS: u32 = 300;

/// Arm one timer per photo. Each captures only a weak handle, so a timer
/// that outlives the page does nothing.
pub fn schedule_reveals(state: &mut State) {
    let schedule = RevealSchedule::new(state.card.photos.len(), &state.card.reveal);
    for step in schedule.steps() {
        let weak = state.this.clone();
        let index = step.index;
        state.reveal_timers.push(Timeout::new(step.delay_ms, move || {
            with_state(&weak, |s| s.dispatch(Action::Reveal(index)));
        }));
    }
    log(&format!("scheduled {} photo reveal(s)", schedule.steps().len()));
}

struct Overlay {
    index: usize,
    root: HtmlElement,
    _listeners: Vec<EventListener>,
}

/// DOM handles of the accepted view.
pub struct CelebrationView {
    ring: HtmlElement,
    slots: Vec<PhotoSlot>,
    photos: Vec<Option<HtmlElement>>,
    overlay: Option<Overlay>,
    fading: Option<(HtmlElement, Timeout)>,
    listeners: Vec<EventListener>,
}

impl CelebrationView {
    pub fn mount(state: &mut State) -> Result<CelebrationView, JsValue> {
        let doc = state.document.clone();
        let root = element(&doc, "section", "celebration")?;

        mount_burst(&doc, &root, state.card.burst_glyphs, &mut state.rng)?;

        let ring = element(&doc, "div", "ring")?;
        root.append_child(&ring)?;

        let center = element(&doc, "div", "center")?;
        let heading = element(&doc, "h1", "heading")?;
        heading.set_inner_text(&state.card.heading);
        let subtitle = element(&doc, "p", "subtitle")?;
        subtitle.set_inner_text(&state.card.subtitle);
        let bob = element(&doc, "div", "bob-heart")?;
        bob.set_inner_html(&heart_svg(heart_color(true), 1.0));
        center.append_child(&heading)?;
        center.append_child(&subtitle)?;
        center.append_child(&bob)?;
        root.append_child(&center)?;

        state.stage.append_child(&root)?;

        let count = state.card.photos.len();
        Ok(CelebrationView {
            ring,
            slots: ring_layout(count, &state.card.ring),
            photos: vec![None; count],
            overlay: None,
            fading: None,
            listeners: Vec::new(),
        })
    }

    pub fn sync(&mut self, state: &State) -> Result<(), JsValue> {
        for i in 0..self.photos.len() {
            if state.ui.is_revealed(i) && self.photos[i].is_none() {
                let node = self.mount_photo(state, i)?;
                self.photos[i] = Some(node);
            }
        }

        let stale = match (&self.overlay, state.ui.enlarged) {
            (Some(o), Some(i)) => o.index != i,
            (Some(_), None) => true,
            _ => false,
        };
        if stale && let Some(old) = self.overlay.take() {
            self.fade_out(old);
        }
        if self.overlay.is_none()
            && let Some(i) = state.ui.enlarged
        {
            self.overlay = Some(mount_overlay(state, i)?);
        }
        Ok(())
    }

    fn mount_photo(&mut self, state: &State, i: usize) -> Result<HtmlElement, JsValue> {
        let doc = &state.document;
        let slot = self.slots[i];

        // position, then grow-in, then the endless float
        let node = element(doc, "div", "photo-slot")?;
        set_style(&node, "left", &format!("calc(50% + {:.2}px)", slot.x));
        set_style(&node, "top", &format!("calc(50% + {:.2}px)", slot.y));
        let pop = element(doc, "div", "photo-pop")?;
        let frame = element(doc, "div", "photo-frame")?;
        set_style(&frame, "--tilt", &format!("{}deg", slot.tilt_deg));
        set_style(&frame, "animation-duration", &format!("{}s", slot.motion.duration_s));
        set_style(&frame, "animation-delay", &format!("{}s", slot.motion.delay_s));
        let inner = element(doc, "div", "photo-inner")?;
        let (img, fallback) = image_with_fallback(
            doc,
            "photo",
            &state.card.photos[i],
            &format!("Photo {}", i + 1),
            &state.card.placeholder,
        )?;
        inner.append_child(&img)?;
        frame.append_child(&inner)?;
        pop.append_child(&frame)?;
        node.append_child(&pop)?;
        self.ring.append_child(&node)?;

        let weak = state.this.clone();
        let on_click = EventListener::new(&node, "click", move |_| {
            with_state(&weak, |s| s.dispatch(Action::Enlarge(i)));
        });
        self.listeners.push(on_click);
        self.listeners.push(fallback);
        Ok(node)
    }

    fn fade_out(&mut self, overlay: Overlay) {
        if let Some((el, _)) = self.fading.take() {
            el.remove();
        }
        toggle_class(&overlay.root, "leaving", true);
        let el = overlay.root.clone();
        let timer = Timeout::new(OVERLAY_EXIT_MS, move || el.remove());
        self.fading = Some((overlay.root, timer));
    }
}

fn mount_burst<R: Rng + ?Sized>(
    doc: &Document,
    root: &HtmlElement,
    count: usize,
    rng: &mut R,
) -> Result<(), JsValue> {
    for b in generate_burst(count, rng) {
        let heart = element(doc, "div", "burst-heart")?;
        set_style(&heart, "--tx", &format!("{:.2}%", b.target.0));
        set_style(&heart, "--ty", &format!("{:.2}%", b.target.1));
        // pause is folded into the cycle; keyframes go idle after 60%
        let cycle = b.motion.duration_s + b.pause_s;
        set_style(&heart, "animation-duration", &format!("{}s", cycle));
        set_style(&heart, "animation-delay", &format!("{:.1}s", b.motion.delay_s));
        heart.set_inner_html(&heart_svg(heart_color(true), 1.0));
        root.append_child(&heart)?;
    }
    Ok(())
}

fn mount_overlay(state: &State, i: usize) -> Result<Overlay, JsValue> {
    let doc = &state.document;
    let root = element(doc, "div", "overlay")?;
    let card = element(doc, "div", "overlay-card")?;
    let inner = element(doc, "div", "overlay-inner")?;
    let (img, fallback) = image_with_fallback(
        doc,
        "photo-large",
        &state.card.photos[i],
        &format!("Photo {}", i + 1),
        &state.card.placeholder,
    )?;
    inner.append_child(&img)?;
    card.append_child(&inner)?;
    root.append_child(&card)?;
    state.stage.append_child(&root)?;

    let weak = state.this.clone();
    let on_backdrop = EventListener::new(&root, "click", move |_| {
        with_state(&weak, |s| s.dispatch(Action::DismissOverlay));
    });
    // clicks on the card itself must not reach the backdrop
    let on_card = EventListener::new(&card, "click", |e| e.stop_propagation());
    Ok(Overlay {
        index: i,
        root,
        _listeners: vec![on_backdrop, on_card, fallback],
    })
}
