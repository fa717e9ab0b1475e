//! Layer visibility resolver
//!
//! A [`RouteLayer`] owns one visibility flag for one layer id. The host
//! calls [`RouteLayer::on_url_change`] whenever its current URL changes;
//! `open` and `close` never touch the flag directly, they only ask the host
//! to navigate, and the flag follows once the new URL comes back.

use crate::config::LayerConfig;
use crate::layers::LayersValue;
use crate::navigate::Navigate;
use crate::query::ParsedUrl;
use tracing::debug;

/// Read the layers parameter `layers_param` out of `url`.
pub fn layers_value(url: &str, layers_param: &str) -> LayersValue {
    LayersValue::from_query(&ParsedUrl::parse(url).query, layers_param)
}

/// Whether `layer_id` is active in `url`.
pub fn is_layer_visible(url: &str, layers_param: &str, layer_id: &str) -> bool {
    layers_value(url, layers_param).contains(layer_id)
}

/// The URL to push so that `layer_id` becomes active.
///
/// Every other query parameter and the fragment are carried over unchanged.
pub fn open_url(url: &str, layers_param: &str, layer_id: &str) -> String {
    let mut parsed = ParsedUrl::parse(url);
    LayersValue::from_query(&parsed.query, layers_param).apply_open(
        &mut parsed.query,
        layers_param,
        layer_id,
    );
    parsed.to_string()
}

/// Visibility state for one layer, driven by the URL.
pub struct RouteLayer<N> {
    config: LayerConfig,
    navigate: N,
    url: Option<String>,
    is_visible: bool,
}

impl<N: Navigate> RouteLayer<N> {
    /// Starts hidden until the first [`on_url_change`](Self::on_url_change).
    pub fn new(config: LayerConfig, navigate: N) -> Self {
        Self {
            config,
            navigate,
            url: None,
            is_visible: false,
        }
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Last URL seen, or empty before the first change.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Re-derive visibility for `url`.
    ///
    /// Returns false and leaves the flag alone when `url` equals the last
    /// URL seen.
    pub fn on_url_change(&mut self, url: &str) -> bool {
        if self.url.as_deref() == Some(url) {
            return false;
        }

        let visible = is_layer_visible(url, &self.config.layers_param, &self.config.layer_id);
        if visible != self.is_visible {
            debug!(
                "Layer '{}' {} for {}",
                self.config.layer_id,
                if visible { "shown" } else { "hidden" },
                url
            );
        }

        self.url = Some(url.to_string());
        self.is_visible = visible;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Pass `component` through while visible.
    pub fn rendered<T>(&self, component: Option<T>) -> Option<T> {
        if self.is_visible {
            component
        } else {
            None
        }
    }

    /// Push a URL that activates this layer. Always returns true.
    pub fn open(&self) -> bool {
        let next = open_url(self.url(), &self.config.layers_param, &self.config.layer_id);
        debug!("Opening layer '{}': {}", self.config.layer_id, next);
        self.navigate.push_url(&next);
        true
    }

    /// Navigate back if this layer is active in the current URL.
    ///
    /// Returns false, without navigating, when there is nothing to close.
    pub fn close(&self) -> bool {
        if !is_layer_visible(self.url(), &self.config.layers_param, &self.config.layer_id) {
            debug!("Layer '{}' not open, nothing to close", self.config.layer_id);
            return false;
        }

        debug!("Closing layer '{}'", self.config.layer_id);
        self.navigate.go_back();
        true
    }
}
