//! Task List
//!
//! The dashboard's controller and the snapshot it publishes.

mod board;
mod state;

pub use board::TaskBoard;
pub use state::{OpError, TaskListState, TaskOp};
