//! route-layer-core - URL-driven layer visibility
//!
//! Decides whether a layer (modal, sheet, drawer) is visible from a marker
//! token in the URL query string, and turns "open" and "close" into
//! navigation requests instead of local state changes. Nothing here depends
//! on a UI framework; hosts feed URLs in and receive navigation calls out.

pub mod config;
pub mod layers;
pub mod navigate;
pub mod query;
pub mod resolver;

pub use config::{ConfigError, EffectTiming, LayerConfig};
pub use layers::LayersValue;
pub use navigate::{FnNavigate, Navigate};
pub use query::{ParsedUrl, QueryParams};
pub use resolver::{is_layer_visible, layers_value, open_url, RouteLayer};
