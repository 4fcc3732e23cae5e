//! Home Page

use leptos::prelude::*;
use taskdeck_client::Route;

use crate::components::RouteLink;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container my-5">
            <header class="mb-4 text-center">
                <h1 class="display-5">"Welcome to Taskdeck"</h1>
                <p class="text-muted">"Your tasks, organized and trackable in one place."</p>
            </header>

            <div class="row justify-content-center">
                <div class="col-md-6 col-sm-8">
                    <div class="card shadow-sm">
                        <div class="card-body text-center p-4">
                            <h2 class="h4 mb-3">"Ready to begin?"</h2>
                            <p class="mb-4">
                                "Please log in if you already have an account, or sign up if you're new here."
                            </p>
                            <div class="d-flex justify-content-center gap-3">
                                <RouteLink route=Route::Login class="btn btn-success px-4">
                                    "Log In"
                                </RouteLink>
                                <RouteLink route=Route::Signup class="btn btn-warning px-4">
                                    "Sign Up"
                                </RouteLink>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
