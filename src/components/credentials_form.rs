//! Credentials Form Component
//!
//! Email + password form shared by the login and signup pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_client::{Credentials, Route};

use crate::components::RouteLink;
use crate::context::use_app_context;

/// Which auth flow the form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

impl FormMode {
    fn heading(&self) -> &'static str {
        match self {
            FormMode::Login => "Please log in",
            FormMode::Signup => "Please Sign Up",
        }
    }

    fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (FormMode::Login, false) => "Log in",
            (FormMode::Login, true) => "Logging in...",
            (FormMode::Signup, false) => "Sign up",
            (FormMode::Signup, true) => "Signing Up...",
        }
    }

    /// Prompt and link to the other form
    fn switch_to(&self) -> (&'static str, Route, &'static str) {
        match self {
            FormMode::Login => ("Don't have an account? ", Route::Signup, "Signup"),
            FormMode::Signup => ("Already have an account? ", Route::Login, "Login"),
        }
    }
}

#[component]
pub fn CredentialsForm(mode: FormMode) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let auth = ctx.auth();
        spawn_local(async move {
            let result = match mode {
                FormMode::Login => auth.login(&credentials).await,
                FormMode::Signup => auth.signup(&credentials).await,
            };
            set_submitting.set(false);
            match result {
                Ok(next) => ctx.navigator.push(next),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let (prompt, other_route, other_label) = mode.switch_to();

    view! {
        <main class="form-signin w-50 m-auto">
            <form on:submit=on_submit>
                <h1 class="h3 mb-3 fw-normal">{mode.heading()}</h1>

                <div class="form-floating mb-3">
                    <input
                        type="email"
                        class="form-control"
                        id="floatingInput"
                        placeholder="name@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="floatingInput">"Email address"</label>
                </div>
                <div class="form-floating mb-3">
                    <input
                        type="password"
                        class="form-control"
                        id="floatingPassword"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <label for="floatingPassword">"Password"</label>
                </div>

                {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}

                <p>
                    {prompt}
                    <RouteLink route=other_route>{other_label}</RouteLink>
                </p>
                <button
                    class="btn btn-primary w-100 py-2"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || mode.submit_label(submitting.get())}
                </button>
            </form>
        </main>
    }
}
