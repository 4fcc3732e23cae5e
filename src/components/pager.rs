//! Pager Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Previous / next controls under the task table
#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let cursor = move || store.board().get().cursor;

    view! {
        <nav class="pager d-flex align-items-center gap-3 mb-4">
            <button
                class="btn btn-outline-secondary"
                disabled=move || !cursor().has_previous()
                on:click=move |_| {
                    let board = ctx.board();
                    spawn_local(async move {
                        board.previous_page().await;
                    });
                }
            >
                "Previous"
            </button>
            <span>{move || format!("Page {} of {}", cursor().page(), cursor().total_pages())}</span>
            <button
                class="btn btn-outline-secondary"
                disabled=move || !cursor().has_next()
                on:click=move |_| {
                    let board = ctx.board();
                    spawn_local(async move {
                        board.next_page().await;
                    });
                }
            >
                "Next"
            </button>
        </nav>
    }
}
