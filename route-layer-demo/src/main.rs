//! route-layer demo - URL-driven layers in a Dioxus web app
//!
//! `/` opens its layers through the router adapter, `/history` through the
//! browser history adapter. Reloading or sharing a URL that carries
//! `?layers=...` brings the same layers back.

mod pages;

use dioxus::prelude::*;
use pages::{HistoryPage, RouterPage};
use route_layer_core::LayerConfig;
use tracing::{warn, Level};

const LAYERS_YAML: &str = include_str!("../layers.yaml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:..query")]
    RouterPage { query: String },
    #[route("/history?:..query")]
    HistoryPage { query: String },
}

fn load_layer_config() -> LayerConfig {
    LayerConfig::from_yaml(LAYERS_YAML).unwrap_or_else(|e| {
        warn!("Invalid layers.yaml, using adapter defaults: {}", e);
        LayerConfig::adapter_default()
    })
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_layer_config);
    rsx! {
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::logger::init(Level::DEBUG).expect("Failed to initialize logger");
    dioxus::launch(App);
}
