use oig_sync::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock ApiTransport with canned per-path responses that records
/// every request it receives.
///
/// Paths registered via `with_failure` fail with the given error on
/// every call; unregistered paths answer 404, which doubles as the
/// "feature not enabled for this org" case.
pub struct MockTransport {
    responses: HashMap<String, Value>,
    failures: HashMap<String, MockFailure>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone, Copy)]
pub enum MockFailure {
    Server,
    Conflict,
    Network,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failures: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, path: &str, value: Value) -> Self {
        self.responses.insert(path.to_string(), value);
        self
    }

    pub fn with_failure(mut self, path: &str, failure: MockFailure) -> Self {
        self.failures.insert(path.to_string(), failure);
        self
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiTransport for MockTransport {
    fn execute(
        &self,
        method: Method,
        path: &str,
        _query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> std::result::Result<Value, ApiError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            body: body.cloned(),
        });

        if let Some(failure) = self.failures.get(path) {
            return Err(match failure {
                MockFailure::Server => ApiError::Server {
                    status: 500,
                    body: "internal error".to_string(),
                },
                MockFailure::Conflict => ApiError::Conflict {
                    body: "already exists".to_string(),
                },
                MockFailure::Network => ApiError::Network {
                    details: "connection refused".to_string(),
                },
            });
        }

        match self.responses.get(path) {
            Some(value) => Ok(value.clone()),
            None => Err(ApiError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}
