//! One-shot requestAnimationFrame scheduling.
//!
//! DESIGN
//! ======
//! There is no free-running loop. A caller asks for the next frame with
//! [`request`]; the `pending` flag collapses repeated requests made within
//! the same frame into one callback. Whoever handles the frame decides
//! whether to ask again, so the page goes quiet once nothing is animating.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Run `on_frame` with the next frame timestamp, unless a frame is already
/// pending for this `pending` flag.
pub fn request(pending: RwSignal<bool>, on_frame: impl FnOnce(f64) + 'static) {
    if pending.try_get_untracked().unwrap_or(true) {
        return;
    }
    pending.set(true);

    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("frame_loop: no window");
            pending.set(false);
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let mut on_frame = Some(on_frame);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            pending.set(false);
            if let Some(run) = on_frame.take() {
                run(ts);
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => *holder.borrow_mut() = Some(cb),
            Err(err) => {
                log::warn!("frame_loop: requestAnimationFrame failed: {err:?}");
                pending.set(false);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(on_frame);
        pending.set(false);
    }
}
