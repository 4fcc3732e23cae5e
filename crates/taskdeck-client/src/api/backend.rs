//! Typed Endpoints
//!
//! One method per backend endpoint, each with an explicit response schema.

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiError, ApiResult, Method, Transport};
use crate::domain::{Credentials, TaskDraft, TaskPage, TaskStatus, UserRef};

// ========================
// Endpoint Paths
// ========================

const CURRENT_USER: &str = "/api/current-user";
const LOGIN: &str = "/api/login";
const SIGNUP: &str = "/api/signup";
const LOGOUT: &str = "/api/logout";
const TASKS: &str = "/usertask/tasks";

// ========================
// Response Schemas
// ========================

#[derive(Deserialize)]
struct CurrentUserResponse {
    user: Value,
}

#[derive(Deserialize)]
struct LoginResponse {
    message: Value,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: TaskStatus,
}

/// Typed access to the task backend over some [`Transport`]
pub struct Backend<T> {
    transport: Rc<T>,
}

impl<T> Clone for Backend<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Backend<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/current-user`. `Ok(None)` when the backend reports no user.
    pub async fn current_user(&self) -> ApiResult<Option<UserRef>> {
        let body = self.transport.send(Method::GET, CURRENT_USER, None).await?;
        let response: CurrentUserResponse = parse(CURRENT_USER, body)?;
        Ok(UserRef::from_value(response.user))
    }

    /// `POST /api/login`. The identity comes back in the `message` field.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<UserRef> {
        let body = self
            .transport
            .send(Method::POST, LOGIN, Some(to_body(credentials)?))
            .await?;
        let response: LoginResponse = parse(LOGIN, body)?;
        UserRef::from_value(response.message)
            .ok_or_else(|| ApiError::Schema(format!("{} returned no user identity", LOGIN)))
    }

    pub async fn signup(&self, credentials: &Credentials) -> ApiResult<()> {
        self.transport
            .send(Method::POST, SIGNUP, Some(to_body(credentials)?))
            .await
            .map(drop)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.transport.send(Method::POST, LOGOUT, None).await.map(drop)
    }

    /// `GET /usertask/tasks?page&limit`
    pub async fn list_tasks(&self, page: u32, limit: u32) -> ApiResult<TaskPage> {
        let path = format!("{}?page={}&limit={}", TASKS, page, limit);
        let body = self.transport.send(Method::GET, &path, None).await?;
        parse(TASKS, body)
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> ApiResult<()> {
        self.transport
            .send(Method::POST, TASKS, Some(to_body(draft)?))
            .await
            .map(drop)
    }

    pub async fn update_task_status(&self, task_id: &str, status: TaskStatus) -> ApiResult<()> {
        let body = to_body(&StatusUpdate { status })?;
        self.transport
            .send(Method::PUT, &task_path(task_id), Some(body))
            .await
            .map(drop)
    }

    pub async fn delete_task(&self, task_id: &str) -> ApiResult<()> {
        self.transport
            .send(Method::DELETE, &task_path(task_id), None)
            .await
            .map(drop)
    }
}

fn task_path(task_id: &str) -> String {
    format!("{}/{}", TASKS, utf8_percent_encode(task_id, NON_ALPHANUMERIC))
}

fn to_body<S: Serialize>(value: &S) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(|e| ApiError::Schema(e.to_string()))
}

fn parse<R: DeserializeOwned>(endpoint: &str, body: Value) -> ApiResult<R> {
    serde_json::from_value(body).map_err(|e| ApiError::Schema(format!("{}: {}", endpoint, e)))
}
