//! Taskdeck Frontend App
//!
//! Wires the client core into the page: builds the services, probes the
//! session once, and renders the guarded route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use reactive_stores::Store;
use taskdeck_client::{
    decide, AuthFlow, Backend, ClientConfig, GuardDecision, HttpTransport, Route, SessionStore,
    TaskBoard,
};

use crate::context::AppContext;
use crate::navigation::Navigator;
use crate::pages::{Dashboard, HomePage, LoginPage, NotFoundPage, SignupPage};
use crate::store::{store_set_board, store_set_session, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    // Services
    let backend = Backend::new(HttpTransport::new(backend_origin(&config.base_url)));
    let session = SessionStore::new();
    let board = TaskBoard::new(backend.clone(), config.page_limit);
    session.subscribe(move |state| store_set_session(&store, state));
    board.subscribe(move |state| store_set_board(&store, state));

    let navigator = Navigator::new(store);
    navigator.start();

    provide_context(AppContext::new(
        session.reader(),
        AuthFlow::new(backend.clone(), session.clone()),
        board,
        navigator,
    ));

    // The one and only session probe
    spawn_local(async move {
        session.probe_session(&backend).await;
    });

    // Route guard: anonymous visitors never stay on a guarded route
    Effect::new(move |_| {
        let session = store.session().get();
        let route = store.route().get();
        if let GuardDecision::Redirect(target) = decide(&session, &route) {
            info!("[router] {} needs a session, going to {}", route.path(), target.path());
            navigator.replace(target);
        }
    });

    view! {
        <Show
            when=move || !store.session().get().is_loading()
            fallback=|| view! { <p>"Loading user..."</p> }
        >
            {move || match decide(&store.session().get(), &store.route().get()) {
                GuardDecision::Render(route) => render_route(route),
                GuardDecision::Redirect(_) | GuardDecision::Pending => ().into_any(),
            }}
        </Show>
    }
}

fn render_route(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Signup => view! { <SignupPage /> }.into_any(),
        Route::Dashboard => view! { <Dashboard /> }.into_any(),
        Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
    }
}

/// Absolute origin for the transport; an empty setting means this page's own origin.
fn backend_origin(base_url: &str) -> String {
    if !base_url.is_empty() {
        return base_url.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
