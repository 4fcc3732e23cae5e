//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second commits.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with ✓/✗ buttons;
/// ✓ runs `on_confirm`, ✗ goes back.
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button class="btn btn-sm btn-outline-danger" on:click=move |_| set_asking.set(true)>
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="btn btn-sm btn-danger"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="btn btn-sm btn-secondary" on:click=move |_| set_asking.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
