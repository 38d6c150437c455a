use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use crate::schedule::{timer_delay, Cadence, Scheduled, TaskHandle};

type Slot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn arm(cadence: Cadence, callback: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let f: &js_sys::Function = callback.as_ref().unchecked_ref();
    match cadence {
        Cadence::NextFrame => {
            window.request_animation_frame(f)?;
        }
        Cadence::After(ms) => {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(f, timer_delay(ms))?;
        }
    }
    Ok(())
}

/// Runs `task` on the browser's redraw/timer queue until the returned handle
/// is stopped. The first tick is armed with `first`.
pub fn spawn<T: Scheduled + 'static>(mut task: T, first: Cadence) -> Result<TaskHandle, JsValue> {
    let handle = TaskHandle::started();

    // `slot` holds the callback so it can re-arm itself; storing it inside an
    // `Option` lets us build the closure first and reference it from within.
    let slot: Slot = Rc::new(RefCell::new(None));
    let again = slot.clone();
    let running = handle.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.is_running() {
            return;
        }
        let next = task.tick();
        if !running.is_running() {
            return;
        }
        if let Some(callback) = again.borrow().as_ref() {
            if let Err(e) = arm(next, callback) {
                log::error!("could not re-arm task: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = slot.borrow().as_ref() {
        arm(first, callback)?;
    }
    Ok(handle)
}
