//! Auth Flows
//!
//! Login, signup and logout as the pages run them: call the backend, then
//! update the session store and say where to navigate next. Errors come back
//! as display strings for the form's error line.

use log::{info, warn};

use crate::api::{Backend, Transport};
use crate::domain::Credentials;
use crate::router::Route;
use crate::session::SessionStore;

const LOGIN_FAILED: &str = "Login failed!";
const SIGNUP_FAILED: &str = "Something went wrong!";

pub struct AuthFlow<T> {
    backend: Backend<T>,
    session: SessionStore,
}

impl<T> Clone for AuthFlow<T> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T: Transport> AuthFlow<T> {
    pub fn new(backend: Backend<T>, session: SessionStore) -> Self {
        Self { backend, session }
    }

    /// Sign in and hand the confirmed identity to the session store.
    /// Returns the dashboard route on success.
    pub async fn login(&self, credentials: &Credentials) -> Result<Route, String> {
        credentials.validate().map_err(|e| e.to_string())?;
        self.session.ensure_signed_out().map_err(|e| {
            warn!("[auth] login not sent: {}", e);
            e.to_string()
        })?;

        let user = self.backend.login(credentials).await.map_err(|e| {
            warn!("[auth] login failed: {}", e);
            e.user_message(LOGIN_FAILED)
        })?;
        self.session.login(user).map_err(|e| e.to_string())?;
        Ok(Route::Dashboard)
    }

    /// Create an account. The user still has to log in afterwards.
    pub async fn signup(&self, credentials: &Credentials) -> Result<Route, String> {
        credentials.validate().map_err(|e| e.to_string())?;

        self.backend.signup(credentials).await.map_err(|e| {
            warn!("[auth] signup failed: {}", e);
            e.user_message(SIGNUP_FAILED)
        })?;
        info!("[auth] account created for {}", credentials.email);
        Ok(Route::Login)
    }

    /// Tell the backend, then clear the local session whatever it answered.
    pub async fn logout(&self) -> Route {
        if let Err(e) = self.backend.logout().await {
            warn!("[auth] backend logout failed, clearing local session anyway: {}", e);
        }
        if let Err(e) = self.session.logout() {
            warn!("[auth] {}", e);
        }
        Route::Login
    }
}
