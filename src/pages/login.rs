//! Login Page

use leptos::prelude::*;

use crate::components::{CredentialsForm, FormMode};

/// On success the session becomes authenticated and the dashboard opens
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <CredentialsForm mode=FormMode::Login /> }
}
