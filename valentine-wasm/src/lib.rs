use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use valentine_core::{CardConfig, InteractionState, Limits};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

pub mod background;
pub mod card;
pub mod celebration;
pub mod dom;
pub mod prompt;
pub mod state;
pub mod utils;

use crate::celebration::CelebrationView;
use crate::dom::element;
use crate::prompt::PromptView;
use crate::state::{STATE, State};
use crate::utils::{log, pick_seed, warn};

/// Bring the DOM in line with `state.ui`. The prompt is updated in place until
/// acceptance; after that it plays its exit and the celebration takes over.
pub fn draw(state: &mut State) -> Result<(), JsValue> {
    if !state.ui.accepted {
        let mut view = match state.prompt.take() {
            Some(v) => v,
            None => PromptView::mount(state)?,
        };
        view.sync(state);
        state.prompt = Some(view);
        return Ok(());
    }

    if let Some(view) = state.prompt.take() {
        let exit = view.unmount();
        state.leaving.push(exit);
    }
    let mut view = match state.celebration.take() {
        Some(v) => v,
        None => CelebrationView::mount(state)?,
    };
    let res = view.sync(state);
    state.celebration = Some(view);
    res
}

/// Build the page inside `#app`, register it as the running instance and
/// draw the first frame.
pub fn mount(window: Window, card: CardConfig, seed: u64) -> Result<Rc<RefCell<State>>, JsValue> {
    let document = window.document().ok_or("no document")?;
    let app = document
        .get_element_by_id("app")
        .ok_or_else(|| JsValue::from_str("mount point #app not found"))?
        .dyn_into::<HtmlElement>()?;
    app.set_inner_html("");

    let mut rng = SmallRng::seed_from_u64(seed);
    let bg = element(&document, "div", "bg-layer")?;
    background::mount(&document, &bg, card.background_glyphs, &mut rng)?;
    app.append_child(&bg)?;
    let stage = element(&document, "div", "stage")?;
    app.append_child(&stage)?;

    let limits = Limits::from(&card);
    let state = Rc::new_cyclic(|this| {
        RefCell::new(State {
            this: this.clone(),
            window,
            document,
            stage,
            card,
            limits,
            ui: InteractionState::new(),
            rng,
            dirty: false,
            frame: None,
            prompt: None,
            celebration: None,
            reveal_timers: Vec::new(),
            leaving: Vec::new(),
        })
    });

    STATE.with(|st| st.replace(Some(state.clone())));
    draw(&mut state.borrow_mut())?;
    Ok(state)
}

async fn boot(window: Window) -> Result<(), JsValue> {
    let search = window.location().search().unwrap_or_default();
    let seed = pick_seed(&search);
    let card = card::load_card(&window, &search).await;
    card.validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log(&format!(
        "valentine: {} photo(s), seed {}",
        card.photos.len(),
        seed
    ));
    mount(window, card, seed)?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or("no window")?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = boot(window).await {
            warn(&format!("start-up failed: {:?}", err));
        }
    });
    Ok(())
}

/// Drop the running page: pending reveal timers are cancelled, listeners
/// removed and the mount point emptied.
#[wasm_bindgen]
pub fn teardown() {
    let state = STATE.with(|st| st.replace(None));
    if let Some(state) = state {
        if let Ok(s) = state.try_borrow()
            && let Some(app) = s.stage.parent_element()
        {
            app.set_inner_html("");
        }
        drop(state);
        log("valentine: torn down");
    }
}
