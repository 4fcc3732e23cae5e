//! UI Components
//!
//! Reusable Leptos components.

mod credentials_form;
mod delete_confirm_button;
mod new_task_form;
mod pager;
mod route_link;
mod task_table;

pub use credentials_form::{CredentialsForm, FormMode};
pub use delete_confirm_button::DeleteConfirmButton;
pub use new_task_form::NewTaskForm;
pub use pager::Pager;
pub use route_link::RouteLink;
pub use task_table::TaskTable;
