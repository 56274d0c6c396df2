use super::Transport;
use crate::endpoint::Method;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Failure produced by [`RecordingTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockError(pub String);

/// Record of a call made to the recording transport.
#[derive(Clone, Debug, PartialEq)]
pub struct MockCall {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

/// Transport that records every request and answers from a queue.
///
/// Unprimed calls succeed and echo the request body back.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    outcomes: Arc<Mutex<VecDeque<Result<Value, MockError>>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, outcome: Result<Value, MockError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    type Response = Value;
    type Error = MockError;

    async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<Value, MockError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| MockError(e.to_string()))?;
        self.calls.lock().unwrap().push(MockCall {
            method,
            path: path.to_string(),
            body: body.clone(),
        });

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(body),
        }
    }
}
