use crate::Route;
use dioxus::prelude::*;
use route_layer_core::LayerConfig;
use route_layer_ui::{use_history_layer, use_router_layer, RouteLayerHandle};

#[component]
fn LayerSheet(title: String, body: String) -> Element {
    rsx! {
        div { class: "layer-sheet",
            h2 { "{title}" }
            p { "{body}" }
        }
    }
}

/// Two layers sharing one query key, driven by the Dioxus router
#[component]
pub fn RouterPage(query: String) -> Element {
    let config = use_context::<LayerConfig>();

    let RouteLayerHandle {
        component: settings_sheet,
        open: open_settings,
        close: close_settings,
        is_visible: settings_visible,
    } = use_router_layer(
        Some(rsx! {
            LayerSheet { title: "Settings", body: "Opened from the URL, closed with back." }
        }),
        config.clone(),
    );

    let RouteLayerHandle {
        component: help_sheet,
        open: open_help,
        close: close_help,
        is_visible: help_visible,
    } = use_router_layer(
        Some(rsx! {
            LayerSheet { title: "Help", body: "Opening a second layer replaces a single active id." }
        }),
        config.with_layer_id("help"),
    );

    rsx! {
        main {
            h1 { "Router layers" }
            p { "Query: {query}" }
            button {
                onclick: move |_| {
                    open_settings.call(());
                },
                "Open settings"
            }
            button {
                onclick: move |_| {
                    open_help.call(());
                },
                "Open help"
            }
            if settings_visible || help_visible {
                button {
                    onclick: move |_| {
                        if !close_help.call(()) {
                            close_settings.call(());
                        }
                    },
                    "Close"
                }
            }
            {settings_sheet}
            {help_sheet}
            Link {
                to: Route::HistoryPage {
                    query: String::new(),
                },
                "History adapter"
            }
        }
    }
}

/// One layer driven by `history.pushState` / `history.back()`
#[component]
pub fn HistoryPage(query: String) -> Element {
    let config = use_context::<LayerConfig>().with_layer_id("details");

    let RouteLayerHandle {
        component,
        open,
        close,
        is_visible,
    } = use_history_layer(
        Some(rsx! {
            LayerSheet { title: "Details", body: "Tracked through popstate." }
        }),
        config,
    );

    rsx! {
        main {
            h1 { "History layers" }
            p { "Loaded with query: {query}" }
            if is_visible {
                button {
                    onclick: move |_| {
                        close.call(());
                    },
                    "Close details"
                }
            } else {
                button {
                    onclick: move |_| {
                        open.call(());
                    },
                    "Show details"
                }
            }
            {component}
            Link {
                to: Route::RouterPage {
                    query: String::new(),
                },
                "Router adapter"
            }
        }
    }
}
