//! Scripted in-memory transport for client tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use respoke_domain::{ApiRequest, ApiResponse, ClientConfig};
use serde_json::Value;

use crate::ports::{HttpTransport, TransportError};

#[derive(Default)]
struct FakeState {
    responses: VecDeque<ApiResponse>,
    requests: Vec<ApiRequest>,
}

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &Value) -> &Self {
        self.push(ApiResponse::json_body(status, body))
    }

    pub(crate) fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.push(ApiResponse::new(status, body))
    }

    fn push(&self, response: ApiResponse) -> &Self {
        if let Ok(mut state) = self.state.lock() {
            state.responses.push_back(response);
        }
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests().len()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }
}

impl HttpTransport for FakeTransport {
    fn connect(_config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new())
    }

    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        state.requests.push(request.clone());
        state
            .responses
            .pop_front()
            .ok_or_else(|| TransportError::ConnectionFailed("no scripted response".to_string()))
    }
}
