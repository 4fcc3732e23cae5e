//! Route Link Component
//!
//! Anchor that navigates inside the app instead of reloading the page.

use leptos::prelude::*;
use taskdeck_client::Route;

use crate::context::use_app_context;

#[component]
pub fn RouteLink(
    route: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.path().to_string();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                // Let the browser handle new-tab / new-window clicks
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
                    return;
                }
                ev.prevent_default();
                ctx.navigator.push(route.clone());
            }
        >
            {children()}
        </a>
    }
}
