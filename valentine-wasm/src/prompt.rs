use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use valentine_core::{Action, PromptState, accept_label, decline_label, prompt_state};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::{element, image_with_fallback, set_style, toggle_class};
use crate::state::{State, with_state};

/// Length of the prompt's exit animation (ms), see `.prompt.leaving` in style.css.
const EXIT_MS: u32 = 500;

/// DOM handles of the question card.
pub struct PromptView {
    root: HtmlElement,
    accept: HtmlElement,
    decline: Option<HtmlElement>,
    listeners: Vec<EventListener>,
    decline_listener: Option<EventListener>,
}

impl PromptView {
    pub fn mount(state: &State) -> Result<PromptView, JsValue> {
        let doc = &state.document;
        let card = &state.card;

        let root = element(doc, "section", "prompt")?;
        let heart = element(doc, "div", "heart-card")?;
        let lobe_left = element(doc, "div", "lobe lobe-left")?;
        let lobe_right = element(doc, "div", "lobe lobe-right")?;
        heart.append_child(&lobe_left)?;
        heart.append_child(&lobe_right)?;
        let content = element(doc, "div", "heart-content")?;

        let (teddy, teddy_fallback) =
            image_with_fallback(doc, "teddy", &card.teddy, "Cute bears hugging", &card.placeholder)?;
        content.append_child(&teddy)?;

        let title = element(doc, "h1", "question")?;
        for (i, line) in card.title_lines().iter().enumerate() {
            if i > 0 {
                let br = doc.create_element("br")?;
                title.append_child(&br)?;
            }
            let text = doc.create_text_node(line);
            title.append_child(&text)?;
        }
        content.append_child(&title)?;

        let buttons = element(doc, "div", "buttons")?;
        let accept = element(doc, "button", "btn-accept")?;
        let decline = element(doc, "button", "btn-decline")?;
        buttons.append_child(&accept)?;
        buttons.append_child(&decline)?;
        content.append_child(&buttons)?;

        heart.append_child(&content)?;
        root.append_child(&heart)?;
        state.stage.append_child(&root)?;

        let weak = state.this.clone();
        let on_accept = EventListener::new(&accept, "click", move |_| {
            with_state(&weak, |s| s.dispatch(Action::Accept));
        });
        let weak = state.this.clone();
        let on_decline = EventListener::new(&decline, "click", move |_| {
            with_state(&weak, |s| s.decline());
        });

        Ok(PromptView {
            root,
            accept,
            decline: Some(decline),
            listeners: vec![on_accept, teddy_fallback],
            decline_listener: Some(on_decline),
        })
    }

    /// Bring labels, emphasis and the decline button in line with the state.
    pub fn sync(&mut self, state: &State) {
        let ui = &state.ui;
        let exhausted = prompt_state(ui, &state.card.decline) == PromptState::Exhausted;

        self.accept.set_inner_text(accept_label(ui, &state.card));
        toggle_class(&self.accept, "coax", exhausted);

        if exhausted {
            if let Some(btn) = self.decline.take() {
                btn.remove();
            }
            self.decline_listener = None;
            return;
        }
        if let Some(btn) = &self.decline {
            btn.set_inner_text(decline_label(ui, &state.card));
            let off = ui.decline_offset;
            set_style(
                btn,
                "transform",
                &format!("translate({:.1}px, {:.1}px)", off.x, off.y),
            );
        }
    }

    /// Play the exit animation and detach once it is done.
    pub fn unmount(self) -> Timeout {
        let PromptView {
            root, listeners, ..
        } = self;
        toggle_class(&root, "leaving", true);
        drop(listeners);
        Timeout::new(EXIT_MS, move || root.remove())
    }
}
