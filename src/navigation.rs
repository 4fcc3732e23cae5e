//! Browser Navigation
//!
//! Keeps the store's route in step with the address bar: pushes and
//! replaces history entries and follows back/forward.

use leptos::prelude::*;
use log::{debug, warn};
use taskdeck_client::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::store::{store_set_route, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct Navigator {
    store: AppStore,
}

impl Navigator {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Path currently in the address bar
    pub fn current_path() -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    /// Load the route from the address bar and follow back/forward from now on
    pub fn start(&self) {
        store_set_route(&self.store, Route::from_path(&Self::current_path()));

        let Some(window) = web_sys::window() else {
            warn!("[router] no window, history disabled");
            return;
        };
        let store = self.store;
        let on_popstate = Closure::<dyn FnMut()>::new(move || {
            let route = Route::from_path(&Self::current_path());
            debug!("[router] popstate -> {}", route.path());
            store_set_route(&store, route);
        });
        if let Err(e) = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
        {
            warn!("[router] could not listen for popstate: {:?}", e);
        }
        // Lives as long as the page
        on_popstate.forget();
    }

    /// Navigate with a new history entry. Navigating to the current route is a no-op.
    pub fn push(&self, route: Route) {
        if self.store.route().get_untracked() == route {
            return;
        }
        debug!("[router] push {}", route.path());
        self.write_history(&route, false);
        store_set_route(&self.store, route);
    }

    /// Navigate replacing the current history entry
    pub fn replace(&self, route: Route) {
        debug!("[router] replace {}", route.path());
        self.write_history(&route, true);
        store_set_route(&self.store, route);
    }

    fn write_history(&self, route: &Route, replace: bool) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
        };
        if let Err(e) = result {
            warn!("[router] history update failed: {:?}", e);
        }
    }
}
