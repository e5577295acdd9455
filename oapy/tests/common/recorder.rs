//! An in-memory transport that records every request.

use std::sync::{Arc, Mutex};

use oapy::transport::BoxFuture;
use oapy::{ClientError, Transport, TransportRequest, TransportResponse};

/// Answers every request with a canned response and keeps the request.
#[derive(Clone)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<TransportRequest>>>,
    status: u16,
    body: String,
}

impl Recorder {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            body: body.to_string(),
        }
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one transport call");
        requests.into_iter().next().unwrap()
    }
}

struct Canned {
    status: u16,
    body: String,
}

impl TransportResponse for Canned {
    fn status(&self) -> u16 {
        self.status
    }

    fn text(self: Box<Self>) -> BoxFuture<'static, Result<String, ClientError>> {
        Box::pin(async move { Ok(self.body) })
    }
}

impl Transport for Recorder {
    fn fetch(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<Box<dyn TransportResponse>, ClientError>> {
        self.requests.lock().unwrap().push(request);
        let response = Canned {
            status: self.status,
            body: self.body.clone(),
        };
        Box::pin(async move { Ok(Box::new(response) as Box<dyn TransportResponse>) })
    }
}

/// A transport that always fails.
pub struct Offline;

impl Transport for Offline {
    fn fetch(
        &self,
        _request: TransportRequest,
    ) -> BoxFuture<'_, Result<Box<dyn TransportResponse>, ClientError>> {
        Box::pin(async { Err(ClientError::transport("network unreachable")) })
    }
}

/// Answers every request with 200 and the request body as the response text.
pub struct Echoing;

impl Transport for Echoing {
    fn fetch(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<Box<dyn TransportResponse>, ClientError>> {
        let response = Canned {
            status: 200,
            body: request.body.unwrap_or_default(),
        };
        Box::pin(async move { Ok(Box::new(response) as Box<dyn TransportResponse>) })
    }
}
