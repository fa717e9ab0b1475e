//! Browser history adapter
//!
//! Follows `location.search` only and navigates with `history.pushState` /
//! `history.back()`. The search string lives in a signal that is refreshed
//! after each push and on every `popstate`, so back and forward buttons
//! re-derive visibility too.

use crate::hooks::{use_route_layer, RouteLayerHandle};
use crate::wasm_utils::WindowEventListener;
use dioxus::prelude::*;
use route_layer_core::{LayerConfig, Navigate};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsValue;

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn browser_history() -> Option<web_sys::History> {
    web_sys::window().and_then(|w| w.history().ok())
}

/// [`Navigate`] over the browser History API.
pub struct HistoryNavigate {
    search: Signal<String>,
}

impl HistoryNavigate {
    /// `search` is refreshed after every successful push.
    pub fn new(search: Signal<String>) -> Self {
        Self { search }
    }
}

impl Navigate for HistoryNavigate {
    fn push_url(&self, url: &str) {
        let Some(history) = browser_history() else {
            warn!("No browser history, dropping layer navigation to {}", url);
            return;
        };

        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
            warn!("pushState rejected {}: {:?}", url, e);
            return;
        }

        let mut search = self.search;
        search.set(current_search());
    }

    fn go_back(&self) {
        match browser_history() {
            Some(history) => {
                if let Err(e) = history.back() {
                    warn!("history.back() failed: {:?}", e);
                }
            }
            None => warn!("No browser history, cannot go back"),
        }
    }
}

/// Layer hook bound to the browser History API.
///
/// `config` defaults for this adapter come from
/// [`LayerConfig::adapter_default`].
pub fn use_history_layer(component: Option<Element>, config: LayerConfig) -> RouteLayerHandle {
    let mut search = use_signal(current_search);

    use_hook(move || {
        let listener = web_sys::window().map(|window| {
            WindowEventListener::new(window, "popstate", move |_| {
                search.set(current_search());
            })
        });
        if listener.is_none() {
            warn!("No window, layer will not follow back/forward navigation");
        }
        Rc::new(listener)
    });

    let url = search();
    use_route_layer(component, url, config, HistoryNavigate::new(search))
}
