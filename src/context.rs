//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::routing::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Push a history entry and switch views
    pub fn navigate(&self, route: Route) {
        if let Err(err) = history_call(&route, false) {
            log::warn!("pushState failed: {err:?}");
        }
        self.set_route.set(route);
    }

    /// Rewrite the current history entry, e.g. to drop a query parameter
    pub fn replace(&self, route: Route) {
        if let Err(err) = history_call(&route, true) {
            log::warn!("replaceState failed: {err:?}");
        }
        self.set_route.set(route);
    }

    /// Re-read the address bar after back/forward navigation
    pub fn sync_from_location(&self) {
        self.set_route.set(current_route());
    }
}

/// Route for the current `window.location`
pub fn current_route() -> Route {
    let location = window().location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

fn history_call(route: &Route, replace: bool) -> Result<(), JsValue> {
    let history = window().history()?;
    let href = route.href();
    if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&href))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&href))
    }
}
