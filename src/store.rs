//! Global Application State Store
//!
//! Reactive mirror of the client core. The core owns the state; this store
//! only holds the latest snapshot so components can subscribe per field.

use leptos::prelude::*;
use reactive_stores::Store;
use taskdeck_client::{Route, SessionState, TaskListState};

/// Snapshot of everything the pages render
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Loading until the startup probe resolves
    pub session: SessionState,
    /// Route the address bar points at (before guarding)
    pub route: Route,
    /// Dashboard task list
    pub board: TaskListState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_session(store: &AppStore, session: &SessionState) {
    *store.session().write() = session.clone();
}

pub fn store_set_route(store: &AppStore, route: Route) {
    *store.route().write() = route;
}

pub fn store_set_board(store: &AppStore, board: &TaskListState) {
    *store.board().write() = board.clone();
}
