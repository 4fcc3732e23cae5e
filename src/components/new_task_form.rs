//! New Task Form Component
//!
//! Title + description form. The draft lives in the task board so a failed
//! create keeps what was typed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let board = ctx.board();
        spawn_local(async move {
            board.create_task().await;
        });
    };

    view! {
        <h2>"Create New Task"</h2>
        <form on:submit=on_submit>
            <div class="mb-3">
                <label for="taskTitle" class="form-label">"Title"</label>
                <input
                    type="text"
                    class="form-control"
                    id="taskTitle"
                    required
                    prop:value=move || store.board().get().draft.title
                    on:input=move |ev| ctx.board().set_draft_title(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label for="taskDesc" class="form-label">"Description"</label>
                <textarea
                    class="form-control"
                    id="taskDesc"
                    required
                    prop:value=move || store.board().get().draft.description
                    on:input=move |ev| ctx.board().set_draft_description(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary">"Create Task"</button>
        </form>
    }
}
