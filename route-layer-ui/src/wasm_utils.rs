//! WASM utilities for browser interop
//!
//! A `Closure` handed to `addEventListener` has to outlive the listener.
//! Rather than `closure.forget()`, which leaks and never detaches, the
//! closure is stored in a struct whose `Drop` removes the listener again.
//! Keeping that struct in a hook ties the listener to the component's
//! lifetime.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    /// Attaches `callback` to `event_name` on `window`.
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if let Err(e) =
            window.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach {} listener: {:?}", event_name, e);
        }

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
