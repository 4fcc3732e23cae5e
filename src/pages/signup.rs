//! Signup Page

use leptos::prelude::*;

use crate::components::{CredentialsForm, FormMode};

/// Creates the account, then sends the user to the login page
#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <CredentialsForm mode=FormMode::Signup /> }
}
