//! Dashboard Page
//!
//! The guarded view: the signed-in user's tasks. Only rendered once the
//! route guard has admitted an authenticated session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTaskForm, Pager, TaskTable};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let user = ctx.session().user().map(|user| user.to_string());

    // First page on mount
    Effect::new(move |_| {
        let board = ctx.board();
        spawn_local(async move {
            board.fetch_page(1).await;
        });
    });

    let on_logout = move |_| {
        let auth = ctx.auth();
        spawn_local(async move {
            let next = auth.logout().await;
            ctx.board().reset();
            ctx.navigator.push(next);
        });
    };

    view! {
        <div class="container mt-5">
            <div class="d-flex justify-content-between align-items-center">
                <h1>"Task Dashboard"</h1>
                <div class="d-flex align-items-center gap-3">
                    {user.map(|user| view! { <span class="text-muted">"Signed in as " {user}</span> })}
                    <button class="btn btn-outline-secondary" on:click=on_logout>"Log out"</button>
                </div>
            </div>

            {move || {
                store
                    .board()
                    .get()
                    .error
                    .map(|error| view! { <p class="text-danger">{error.message}</p> })
            }}

            <TaskTable />
            <Pager />
            <NewTaskForm />
        </div>
    }
}
