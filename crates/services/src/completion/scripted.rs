use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{CompletionRequest, TextCompletion};
use crate::error::CompletionError;

type Reply = Result<String, String>;

/// Deterministic backend that replays queued replies in order.
///
/// Every request is kept so tests can inspect the prompts that were built.
/// Once the script runs dry, further calls fail with `EmptyResponse`.
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a script of successful replies.
    #[must_use]
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = Self::new();
        for reply in replies {
            script.push_reply(reply);
        }
        script
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        lock(&self.replies).push_back(Ok(reply.into()));
    }

    /// Queues a failure, surfaced as `CompletionError::Scripted`.
    pub fn push_failure(&self, reason: impl Into<String>) {
        lock(&self.replies).push_back(Err(reason.into()));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.requests).last().cloned()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        lock(&self.replies).len()
    }
}

#[async_trait]
impl TextCompletion for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        lock(&self.requests).push(request.clone());
        let reply = lock(&self.replies).pop_front();
        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(reason)) => Err(CompletionError::Scripted(reason)),
            None => Err(CompletionError::EmptyResponse),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
