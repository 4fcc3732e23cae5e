//! Application Context
//!
//! Client-core handles provided via Leptos Context API. The core types are
//! `Rc`-based, so they sit in local-storage `StoredValue`s.

use leptos::prelude::*;
use taskdeck_client::{AuthFlow, HttpTransport, SessionReader, TaskBoard};

use crate::navigation::Navigator;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Read-only session handle; only the auth flows change the session
    session: StoredValue<SessionReader, LocalStorage>,
    auth: StoredValue<AuthFlow<HttpTransport>, LocalStorage>,
    board: StoredValue<TaskBoard<HttpTransport>, LocalStorage>,
    pub navigator: Navigator,
}

impl AppContext {
    pub fn new(
        session: SessionReader,
        auth: AuthFlow<HttpTransport>,
        board: TaskBoard<HttpTransport>,
        navigator: Navigator,
    ) -> Self {
        Self {
            session: StoredValue::new_local(session),
            auth: StoredValue::new_local(auth),
            board: StoredValue::new_local(board),
            navigator,
        }
    }

    pub fn session(&self) -> SessionReader {
        self.session.get_value()
    }

    pub fn auth(&self) -> AuthFlow<HttpTransport> {
        self.auth.get_value()
    }

    pub fn board(&self) -> TaskBoard<HttpTransport> {
        self.board.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
