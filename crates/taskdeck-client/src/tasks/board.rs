//! Task Board
//!
//! Fetches one page of the signed-in user's tasks and runs create / status /
//! delete against it. The local list is never patched: every successful
//! mutation is followed by a refetch of the current page, so what is shown
//! is always a snapshot the server returned.
//!
//! Fetches are not cancelled. When two are in flight the one that resolves
//! last overwrites the list. Only [`TaskBoard::reset`] invalidates them:
//! anything started before a reset is dropped when it lands.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};

use super::{TaskListState, TaskOp};
use crate::api::{ApiError, Backend, Transport};
use crate::domain::{PageCursor, TaskStatus};
use crate::notify::Listeners;

#[derive(Default)]
struct BoardInner {
    state: RefCell<TaskListState>,
    in_flight: Cell<u32>,
    generation: Cell<u64>,
    listeners: Listeners<TaskListState>,
}

/// Controller behind the dashboard view
pub struct TaskBoard<T> {
    backend: Backend<T>,
    limit: u32,
    inner: Rc<BoardInner>,
}

impl<T> Clone for TaskBoard<T> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            limit: self.limit,
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport> TaskBoard<T> {
    /// `limit` is the page size sent with every list request
    pub fn new(backend: Backend<T>, limit: u32) -> Self {
        Self {
            backend,
            limit: limit.max(1),
            inner: Rc::default(),
        }
    }

    pub fn snapshot(&self) -> TaskListState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self, callback: impl Fn(&TaskListState) + 'static) {
        self.inner.listeners.add(callback);
    }

    /// Drop everything shown, e.g. after the user signs out
    pub fn reset(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.update(|s| *s = TaskListState::default());
    }

    // ========================
    // Draft
    // ========================

    pub fn set_draft_title(&self, title: String) {
        self.update(|s| s.draft.title = title);
    }

    pub fn set_draft_description(&self, description: String) {
        self.update(|s| s.draft.description = description);
    }

    // ========================
    // Reads
    // ========================

    /// Load `page` and replace the whole list with it.
    ///
    /// On failure the previous list stays on screen next to the error.
    pub async fn fetch_page(&self, page: u32) -> bool {
        let mut page = page.max(1);
        let generation = self.inner.generation.get();
        self.begin_fetch();

        let ok = loop {
            debug!("[tasks] fetching page {} (limit {})", page, self.limit);
            let response = self.backend.list_tasks(page, self.limit).await;
            if self.is_stale(generation) {
                debug!("[tasks] dropping page {} fetched before reset", page);
                break false;
            }
            match response {
                Ok(result) => {
                    let total = result.total_pages.unwrap_or(page).max(1);
                    if page > total {
                        info!("[tasks] page {} is past the last page {}, reloading", page, total);
                        page = total;
                        continue;
                    }
                    debug!("[tasks] page {} of {}: {} tasks", page, total, result.tasks.len());
                    self.update(|s| {
                        s.tasks = result.tasks;
                        s.cursor = PageCursor::new(page, total);
                        s.fetched += 1;
                        s.clear_error(TaskOp::Fetch);
                    });
                    break true;
                }
                Err(e) => {
                    self.fail(TaskOp::Fetch, &e);
                    break false;
                }
            }
        };

        self.end_fetch();
        ok
    }

    /// Reload the page the cursor is on
    pub async fn refetch(&self) -> bool {
        let page = self.inner.state.borrow().cursor.page();
        self.fetch_page(page).await
    }

    /// No request when already on the first page
    pub async fn previous_page(&self) -> bool {
        let previous = self.inner.state.borrow().cursor.previous();
        match previous {
            Some(page) => self.fetch_page(page).await,
            None => false,
        }
    }

    /// No request when already on the last page
    pub async fn next_page(&self) -> bool {
        let next = self.inner.state.borrow().cursor.next();
        match next {
            Some(page) => self.fetch_page(page).await,
            None => false,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Submit the current draft.
    ///
    /// An incomplete draft is not sent. A failed create keeps what the user
    /// typed.
    pub async fn create_task(&self) -> bool {
        let draft = self.inner.state.borrow().draft.clone();
        if let Err(e) = draft.validate() {
            debug!("[tasks] not creating task: {}", e);
            return false;
        }

        let generation = self.inner.generation.get();
        let result = self.backend.create_task(&draft).await;
        if self.is_stale(generation) {
            return false;
        }
        match result {
            Ok(()) => {
                info!("[tasks] created \"{}\"", draft.title);
                self.update(|s| {
                    s.draft.clear();
                    s.clear_error(TaskOp::Create);
                });
                self.refetch().await;
                true
            }
            Err(e) => {
                self.fail(TaskOp::Create, &e);
                false
            }
        }
    }

    /// Change a task's status. The dropdown is not rolled back on failure;
    /// the next successful fetch brings it back in line.
    pub async fn set_status(&self, task_id: &str, status: TaskStatus) -> bool {
        let generation = self.inner.generation.get();
        let result = self.backend.update_task_status(task_id, status).await;
        if self.is_stale(generation) {
            return false;
        }
        match result {
            Ok(()) => {
                info!("[tasks] {} -> {}", task_id, status.as_str());
                self.update(|s| s.clear_error(TaskOp::SetStatus));
                self.refetch().await;
                true
            }
            Err(e) => {
                self.fail(TaskOp::SetStatus, &e);
                false
            }
        }
    }

    pub async fn delete_task(&self, task_id: &str) -> bool {
        let generation = self.inner.generation.get();
        let result = self.backend.delete_task(task_id).await;
        if self.is_stale(generation) {
            return false;
        }
        match result {
            Ok(()) => {
                info!("[tasks] deleted {}", task_id);
                self.update(|s| s.clear_error(TaskOp::Delete));
                self.refetch().await;
                true
            }
            Err(e) => {
                self.fail(TaskOp::Delete, &e);
                false
            }
        }
    }

    // ========================
    // Internals
    // ========================

    fn update(&self, mutate: impl FnOnce(&mut TaskListState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        self.inner.listeners.emit(&snapshot);
    }

    fn fail(&self, op: TaskOp, error: &ApiError) {
        warn!("[tasks] {:?} failed: {}", op, error);
        let message = error.user_message(op.fallback_message());
        self.update(|s| s.set_error(op, message));
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.inner.generation.get() != generation
    }

    fn begin_fetch(&self) {
        self.inner.in_flight.set(self.inner.in_flight.get() + 1);
        self.update(|s| s.loading = true);
    }

    fn end_fetch(&self) {
        let remaining = self.inner.in_flight.get().saturating_sub(1);
        self.inner.in_flight.set(remaining);
        self.update(|s| s.loading = remaining > 0);
    }
}
