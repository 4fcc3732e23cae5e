//! Session Store
//!
//! Tab-lifetime authentication state. Starts in [`SessionState::Loading`],
//! is resolved exactly once by the startup probe, and afterwards only moves
//! between anonymous and authenticated through `login` / `logout`.
//!
//! The store is the single writer. Everything else gets a [`SessionReader`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;

use crate::api::{Backend, Transport};
use crate::domain::UserRef;
use crate::notify::Listeners;

/// Where the session currently stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Startup probe still in flight; no routing decision may be made
    #[default]
    Loading,
    Anonymous,
    Authenticated(UserRef),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserRef> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Rejected session transitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("session check has not finished yet")]
    StillLoading,

    #[error("already signed in as {current}; sign out first")]
    AccountSwitch { current: UserRef },
}

#[derive(Default)]
struct Inner {
    state: RefCell<SessionState>,
    probed: Cell<bool>,
    listeners: Listeners<SessionState>,
}

impl Inner {
    fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn transition(&self, next: SessionState) {
        *self.state.borrow_mut() = next.clone();
        self.listeners.emit(&next);
    }
}

/// Owner of the session state and the only handle that can change it
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

/// Read-only view of a [`SessionStore`]
#[derive(Clone)]
pub struct SessionReader {
    inner: Rc<Inner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(&self) -> SessionReader {
        SessionReader {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.snapshot()
    }

    pub fn subscribe(&self, callback: impl Fn(&SessionState) + 'static) {
        self.inner.listeners.add(callback);
    }

    /// Ask the backend whether a session cookie is already valid.
    ///
    /// Runs at most once per store; later calls return `false` without a
    /// request. Every failure, 401 included, resolves to anonymous.
    pub async fn probe_session<T: Transport>(&self, backend: &Backend<T>) -> bool {
        if self.inner.probed.replace(true) {
            warn!("[session] probe already ran, ignoring");
            return false;
        }

        let next = match backend.current_user().await {
            Ok(Some(user)) => {
                info!("[session] restored session for {}", user);
                SessionState::Authenticated(user)
            }
            Ok(None) => {
                info!("[session] no active session");
                SessionState::Anonymous
            }
            Err(e) => {
                info!("[session] no active session ({})", e);
                SessionState::Anonymous
            }
        };
        self.inner.transition(next);
        true
    }

    /// Whether a login may be sent to the backend at all. Must be checked
    /// before the request; the store never follows an account switch.
    pub fn ensure_signed_out(&self) -> Result<(), SessionError> {
        match self.inner.snapshot() {
            SessionState::Loading => Err(SessionError::StillLoading),
            SessionState::Authenticated(current) => Err(SessionError::AccountSwitch { current }),
            SessionState::Anonymous => Ok(()),
        }
    }

    /// Record a login the caller already confirmed with the backend.
    pub fn login(&self, user: UserRef) -> Result<(), SessionError> {
        match self.inner.snapshot() {
            SessionState::Loading => Err(SessionError::StillLoading),
            SessionState::Authenticated(current) if current == user => Ok(()),
            SessionState::Authenticated(current) => Err(SessionError::AccountSwitch { current }),
            SessionState::Anonymous => {
                info!("[session] signed in as {}", user);
                self.inner.transition(SessionState::Authenticated(user));
                Ok(())
            }
        }
    }

    /// Forget the local user. The backend call is the caller's business.
    pub fn logout(&self) -> Result<(), SessionError> {
        match self.inner.snapshot() {
            SessionState::Loading => Err(SessionError::StillLoading),
            SessionState::Anonymous => Ok(()),
            SessionState::Authenticated(user) => {
                info!("[session] signed out {}", user);
                self.inner.transition(SessionState::Anonymous);
                Ok(())
            }
        }
    }
}

impl SessionReader {
    pub fn state(&self) -> SessionState {
        self.inner.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    pub fn user(&self) -> Option<UserRef> {
        self.inner.state.borrow().user().cloned()
    }

    pub fn subscribe(&self, callback: impl Fn(&SessionState) + 'static) {
        self.inner.listeners.add(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeTransport;
    use crate::api::ApiError;
    use serde_json::json;

    fn backend() -> Backend<FakeTransport> {
        Backend::new(FakeTransport::new())
    }

    async fn anonymous_store() -> SessionStore {
        let api = backend();
        api.transport().reply(
            "GET /api/current-user",
            Err(ApiError::Request {
                status: 401,
                message: None,
            }),
        );
        let store = SessionStore::new();
        store.probe_session(&api).await;
        store
    }

    #[tokio::test]
    async fn test_probe_restores_user() {
        let api = backend();
        api.transport()
            .reply("GET /api/current-user", Ok(json!({"user": "alice@example.com"})));

        let store = SessionStore::new();
        assert!(store.state().is_loading());
        assert!(store.probe_session(&api).await);
        assert_eq!(
            store.state(),
            SessionState::Authenticated(UserRef::from("alice@example.com"))
        );
    }

    #[tokio::test]
    async fn test_probe_401_is_anonymous() {
        let store = anonymous_store().await;
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_probe_network_failure_is_anonymous() {
        let api = backend();
        let store = SessionStore::new();
        store.probe_session(&api).await;
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_probe_runs_once() {
        let api = backend();
        api.transport()
            .reply("GET /api/current-user", Ok(json!({"user": null})));
        api.transport()
            .reply("GET /api/current-user", Ok(json!({"user": "mallory"})));

        let store = SessionStore::new();
        assert!(store.probe_session(&api).await);
        assert!(!store.probe_session(&api).await);

        assert_eq!(api.transport().count("GET /api/current-user"), 1);
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_logout_cycle() {
        let store = anonymous_store().await;
        let reader = store.reader();

        store.login(UserRef::from("alice@example.com")).unwrap();
        assert_eq!(reader.user(), Some(UserRef::from("alice@example.com")));

        store.logout().unwrap();
        assert_eq!(reader.state(), SessionState::Anonymous);
        assert!(store.logout().is_ok());
    }

    #[tokio::test]
    async fn test_no_account_switch_in_place() {
        let store = anonymous_store().await;
        store.login(UserRef::from("alice")).unwrap();

        assert!(store.login(UserRef::from("alice")).is_ok());
        assert_eq!(
            store.login(UserRef::from("bob")),
            Err(SessionError::AccountSwitch {
                current: UserRef::from("alice")
            })
        );
        assert_eq!(store.state().user(), Some(&UserRef::from("alice")));
    }

    #[tokio::test]
    async fn test_ensure_signed_out() {
        let store = anonymous_store().await;
        assert!(store.ensure_signed_out().is_ok());

        store.login(UserRef::from("alice")).unwrap();
        assert_eq!(
            store.ensure_signed_out(),
            Err(SessionError::AccountSwitch {
                current: UserRef::from("alice")
            })
        );
    }

    #[test]
    fn test_writes_rejected_while_loading() {
        let store = SessionStore::new();
        assert_eq!(store.ensure_signed_out(), Err(SessionError::StillLoading));
        assert_eq!(store.login(UserRef::from("alice")), Err(SessionError::StillLoading));
        assert_eq!(store.logout(), Err(SessionError::StillLoading));
        assert!(store.reader().is_loading());
    }

    #[tokio::test]
    async fn test_subscribers_see_each_transition() {
        let api = backend();
        api.transport()
            .reply("GET /api/current-user", Ok(json!({"user": null})));

        let store = SessionStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store
            .reader()
            .subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.probe_session(&api).await;
        store.login(UserRef::from("alice")).unwrap();
        store.logout().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionState::Anonymous,
                SessionState::Authenticated(UserRef::from("alice")),
                SessionState::Anonymous,
            ]
        );
    }
}
