//! Task Table Component
//!
//! Current page of tasks with a status dropdown and delete per row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_client::{Task, TaskStatus};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskTable() -> impl IntoView {
    let store = use_app_store();
    // Typing into the new task form also changes the board; only redraw per fetch.
    // Keyed on the fetch count so an identical page still resets every dropdown.
    let tasks = Memo::new(move |_| {
        let board = store.board().get();
        (board.fetched, board.tasks)
    });
    let loading = Memo::new(move |_| store.board().get().loading);

    view! {
        {move || {
            let (_, tasks) = tasks.get();
            if loading.get() && tasks.is_empty() {
                view! { <p>"Loading tasks..."</p> }.into_any()
            } else if tasks.is_empty() {
                view! { <p>"No tasks found for the current user."</p> }.into_any()
            } else {
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {tasks
                                .into_iter()
                                .map(|task| view! { <TaskRow task=task /> })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }
        }}
    }
}

/// One table row, rebuilt after every successful fetch
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let current = task.status;

    let change_id = task.id.clone();
    let on_status_change = move |ev: leptos::ev::Event| {
        // Only the three known labels are offered; anything else is dropped here.
        let Some(status) = TaskStatus::from_label(&event_target_value(&ev)) else {
            return;
        };
        let board = ctx.board();
        let id = change_id.clone();
        spawn_local(async move {
            board.set_status(&id, status).await;
        });
    };

    let delete_id = task.id.clone();
    let on_delete = Callback::new(move |_| {
        let board = ctx.board();
        let id = delete_id.clone();
        spawn_local(async move {
            board.delete_task(&id).await;
        });
    });

    view! {
        <tr>
            <td>{task.title}</td>
            <td>{task.description}</td>
            <td>{current.as_str()}</td>
            <td class="task-actions">
                <select on:change=on_status_change>
                    {TaskStatus::ALL
                        .iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_str() selected={*status == current}>
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <DeleteConfirmButton on_confirm=on_delete />
            </td>
        </tr>
    }
}
