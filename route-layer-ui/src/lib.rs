//! route-layer-ui - Dioxus bindings for URL-driven layers
//!
//! [`use_route_layer`] binds a resolver to any URL source. The two adapters
//! supply one: [`use_router_layer`] follows the Dioxus router,
//! [`use_history_layer`] follows the browser History API directly.

pub mod history;
pub mod hooks;
pub mod router;
pub mod wasm_utils;

pub use history::{use_history_layer, HistoryNavigate};
pub use hooks::{use_route_layer, RouteLayerHandle};
pub use router::{use_router_layer, RouterNavigate};
