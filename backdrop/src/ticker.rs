//! Scoped `requestAnimationFrame` loop.
//!
//! [`Ticker::start`] begins a self-rescheduling frame loop. Dropping the
//! ticker cancels the pending frame handle and releases the callback closure
//! (breaking its self-reference cycle), so the loop can never outlive its
//! owner — on any exit path.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A running animation-frame loop, cancelled on drop.
pub struct Ticker {
    /// Pending frame handle; `None` once cancelled.
    handle: Rc<Cell<Option<i32>>>,
    /// The callback keeps a clone of this to reschedule itself.
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl Ticker {
    /// Start a frame loop invoking `tick` with each frame timestamp.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no window is available or the initial frame request
    /// is rejected.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let handle = Rc::new(Cell::new(None::<i32>));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        let handle_inner = Rc::clone(&handle);
        let closure_inner = Rc::clone(&closure);
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            // Cancelled between request and delivery: stop without rescheduling.
            if handle_inner.get().is_none() {
                return;
            }
            tick(timestamp);

            let mut next = None;
            if let Some(window) = web_sys::window()
                && let Some(cb) = closure_inner.borrow().as_ref()
                && let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
            {
                next = Some(id);
            }
            handle_inner.set(next);
        }) as Box<dyn FnMut(f64)>));

        let initial = {
            let guard = closure.borrow();
            let cb = guard
                .as_ref()
                .ok_or_else(|| JsValue::from_str("ticker closure missing"))?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        handle.set(Some(initial));

        Ok(Self { handle, closure })
    }

    /// Whether a frame is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take()
            && let Some(window) = web_sys::window()
        {
            // An Err means the frame already fired; nothing left to release.
            window.cancel_animation_frame(id).unwrap_or_default();
        }
        // Break the closure's self-reference cycle so it can be freed.
        self.closure.borrow_mut().take();
    }
}
