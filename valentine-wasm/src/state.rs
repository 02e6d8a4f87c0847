use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use rand::rngs::SmallRng;
use valentine_core::{Action, CardConfig, Change, InteractionState, Limits, sample_offset};
use web_sys::{Document, HtmlElement, Window};

use crate::celebration::{self, CelebrationView};
use crate::prompt::PromptView;
use crate::utils::{log, warn};

/// Page state stored behind an `Rc<RefCell<_>>` so it can be shared across the
/// DOM callbacks. Callbacks only hold `Weak` handles; dropping the last `Rc`
/// tears the page down and cancels pending timers.
pub struct State {
    pub this: Weak<RefCell<State>>,
    pub window: Window,
    pub document: Document,
    pub stage: HtmlElement,
    pub card: CardConfig,
    pub limits: Limits,
    pub ui: InteractionState,
    pub rng: SmallRng,
    // set by handlers, cleared by the frame callback after a redraw
    pub dirty: bool,
    pub frame: Option<AnimationFrame>,
    pub prompt: Option<PromptView>,
    pub celebration: Option<CelebrationView>,
    pub reveal_timers: Vec<Timeout>,
    // outgoing views finishing their exit animation
    pub leaving: Vec<Timeout>,
}

impl State {
    /// Run one action through the reducer and react to what changed.
    pub fn dispatch(&mut self, action: Action) -> Change {
        let change = self.ui.apply(action, self.limits);
        match change {
            Change::None => return change,
            Change::Declined => log(&format!("declined {} time(s)", self.ui.decline_count)),
            Change::Accepted => {
                log("accepted");
                celebration::schedule_reveals(self);
            }
            Change::Revealed => log(&format!("revealed {} photo(s)", self.ui.revealed.len())),
            Change::Enlarged => log(&format!("enlarged photo {:?}", self.ui.enlarged)),
            Change::Dismissed => log("overlay dismissed"),
        }
        self.request_redraw();
        change
    }

    /// Redraw on the next animation frame. Handlers never touch the DOM
    /// themselves, so no listener is dropped while it is running. The pending
    /// frame is owned here; dropping the state cancels it.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
        if self.frame.is_some() {
            return;
        }
        let weak = self.this.clone();
        self.frame = Some(request_animation_frame(move |_| {
            with_state(&weak, |s| {
                s.frame.take();
                if s.dirty {
                    s.dirty = false;
                    if let Err(err) = crate::draw(s) {
                        warn(&format!("redraw failed: {:?}", err));
                    }
                }
            });
        }));
    }

    /// Decline with a fresh random jump target.
    pub fn decline(&mut self) -> Change {
        let offset = sample_offset(&mut self.rng, &self.card.decline);
        self.dispatch(Action::Decline(offset))
    }
}

/// Apply `f` to the state if the page is still alive and not mid-update.
pub fn with_state<T>(weak: &Weak<RefCell<State>>, f: impl FnOnce(&mut State) -> T) -> Option<T> {
    let rc = weak.upgrade()?;
    let mut s = rc.try_borrow_mut().ok()?;
    Some(f(&mut s))
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
