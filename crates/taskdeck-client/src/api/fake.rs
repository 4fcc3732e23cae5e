//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

use super::{ApiError, ApiResult, Method, Transport};

pub(crate) enum Reply {
    Ready(ApiResult<Value>),
    Deferred(oneshot::Receiver<ApiResult<Value>>),
}

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Call {
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Serves queued replies keyed by `"METHOD /path?query"` and records every call.
/// A request with nothing queued fails with a network error.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, key: &str, result: ApiResult<Value>) {
        self.push(key, Reply::Ready(result));
    }

    /// Queue a reply that resolves only when the returned sender fires
    pub fn defer(&self, key: &str) -> oneshot::Sender<ApiResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.push(key, Reply::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, key: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.key() == key).count()
    }

    fn push(&self, key: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push_back(reply);
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let call = Call {
            method,
            path: path.to_string(),
            body,
        };
        let key = call.key();
        self.calls.borrow_mut().push(call);

        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("deferred reply dropped".into()))),
            None => Err(ApiError::Network(format!("no scripted reply for {}", key))),
        }
    }
}
