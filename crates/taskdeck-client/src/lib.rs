//! Taskdeck Client Core
//!
//! Everything the task dashboard needs below the view layer:
//! - api: credentialed transport and typed backend endpoints
//! - session: startup probe and login/logout state
//! - router: routes and the guard in front of the dashboard
//! - tasks: the dashboard controller (fetch, create, update, delete)
//! - auth: login / signup / logout flows
//!
//! All state is single-threaded (`Rc` + `RefCell`); futures are `?Send` and
//! meant for the browser event loop.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod router;
pub mod session;
pub mod tasks;

mod notify;

pub use api::{ApiError, ApiResult, Backend, HttpTransport, Method, Transport};
pub use auth::AuthFlow;
pub use config::ClientConfig;
pub use domain::{
    Credentials, PageCursor, Task, TaskDraft, TaskPage, TaskStatus, UserRef, ValidationError,
};
pub use router::{decide, GuardDecision, Route};
pub use session::{SessionError, SessionReader, SessionState, SessionStore};
pub use tasks::{OpError, TaskBoard, TaskListState, TaskOp};
