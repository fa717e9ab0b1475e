use dioxus::prelude::*;
use route_layer_core::{EffectTiming, LayerConfig, Navigate, RouteLayer};
use std::cell::RefCell;
use std::rc::Rc;

/// What a layer hook hands back to its component.
pub struct RouteLayerHandle {
    /// The layer's element while visible, `None` otherwise
    pub component: Option<Element>,
    /// Push a URL that shows the layer. Always returns true.
    pub open: Callback<(), bool>,
    /// Navigate back if the layer is showing. Returns false when it isn't.
    pub close: Callback<(), bool>,
    pub is_visible: bool,
}

/// Bind a layer to `url`, navigating through `navigate`.
///
/// One resolver is kept per component instance. `config` and `navigate` are
/// read on the first render only; `url` is followed on every render and
/// re-derived only when it changes. With [`EffectTiming::BeforePaint`] the
/// flag is derived during render; with [`EffectTiming::AfterCommit`] it is
/// derived in an effect and published through a signal.
pub fn use_route_layer<N>(
    component: Option<Element>,
    url: String,
    config: LayerConfig,
    navigate: N,
) -> RouteLayerHandle
where
    N: Navigate + 'static,
{
    let layer = use_hook(|| Rc::new(RefCell::new(RouteLayer::new(config, navigate))));
    let timing = layer.borrow().config().timing();
    let mut committed_visible = use_signal(|| false);

    let is_visible = match timing {
        EffectTiming::BeforePaint => {
            let mut layer = layer.borrow_mut();
            layer.on_url_change(&url);
            layer.is_visible()
        }
        EffectTiming::AfterCommit => {
            let effect_layer = layer.clone();
            use_effect(use_reactive((&url,), move |(url,)| {
                let visible = {
                    let mut layer = effect_layer.borrow_mut();
                    layer.on_url_change(&url);
                    layer.is_visible()
                };
                if *committed_visible.peek() != visible {
                    committed_visible.set(visible);
                }
            }));
            committed_visible()
        }
    };

    let open_layer = layer.clone();
    let open = use_callback(move |()| open_layer.borrow().open());
    let close_layer = layer.clone();
    let close = use_callback(move |()| close_layer.borrow().close());

    let component = layer.borrow().rendered(component);

    RouteLayerHandle {
        component,
        open,
        close,
        is_visible,
    }
}
