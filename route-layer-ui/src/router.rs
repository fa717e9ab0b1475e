//! Router adapter
//!
//! Follows the router's full route string (path, query and fragment) and
//! navigates through its [`Navigator`]. URLs travel as raw internal targets
//! and are never parsed into the app's route type, so percent-encoded query
//! values (`%2B`, `%26`, `%3D`) reach the resolver exactly as they appear in
//! the address bar. The route that renders the layer still has to accept
//! arbitrary query strings, e.g. `#[route("/inbox?:..query")]`.

use crate::hooks::{use_route_layer, RouteLayerHandle};
use dioxus::prelude::*;
use dioxus::router::{router, NavigationTarget, Navigator};
use route_layer_core::{LayerConfig, Navigate};

/// Internal navigation target for `url`, kept byte for byte.
fn layer_target(url: &str) -> NavigationTarget {
    NavigationTarget::Internal(url.to_string())
}

/// [`Navigate`] over a Dioxus router [`Navigator`].
pub struct RouterNavigate {
    navigator: Navigator,
}

impl RouterNavigate {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for RouterNavigate {
    fn push_url(&self, url: &str) {
        self.navigator.push(layer_target(url));
    }

    fn go_back(&self) {
        self.navigator.go_back();
    }
}

/// Layer hook bound to the Dioxus router.
///
/// `config` defaults for this adapter come from
/// [`LayerConfig::adapter_default`].
pub fn use_router_layer(component: Option<Element>, config: LayerConfig) -> RouteLayerHandle {
    // Subscribes this component to route changes.
    let url = router().full_route_string();
    let navigator = use_navigator();
    use_route_layer(component, url, config, RouterNavigate::new(navigator))
}
