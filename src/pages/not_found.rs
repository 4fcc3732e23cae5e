//! Not Found Page

use leptos::prelude::*;
use taskdeck_client::Route;

use crate::components::RouteLink;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="container my-5 text-center">
            <h1 class="h3">"Page not found"</h1>
            <p class="text-muted">"Nothing lives at " <code>{path}</code> "."</p>
            <RouteLink route=Route::Home>"Back to the start page"</RouteLink>
        </div>
    }
}
