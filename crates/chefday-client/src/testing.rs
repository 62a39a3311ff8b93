//! Test doubles shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;
use tokio::net::TcpListener;

use chefday_core::RemoteRecord;

use crate::error::FetchError;
use crate::http::JsonFetcher;

/// Canned reply for one URL.
#[derive(Debug, Clone)]
pub enum StubReply {
    Json(RemoteRecord),
    Status(u16, &'static str),
}

/// In-memory [`JsonFetcher`] that records every URL it is asked for.
///
/// Unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct StubFetcher {
    replies: HashMap<String, StubReply>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: RemoteRecord) -> Self {
        self.replies.insert(url.to_string(), StubReply::Json(body));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16, status_text: &'static str) -> Self {
        self.replies
            .insert(url.to_string(), StubReply::Status(status, status_text));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonFetcher for StubFetcher {
    async fn fetch_json(&self, url: &str) -> Result<RemoteRecord, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.replies.get(url) {
            Some(StubReply::Json(body)) => Ok(body.clone()),
            Some(StubReply::Status(status, status_text)) => Err(FetchError::Transport {
                status: *status,
                status_text: status_text.to_string(),
            }),
            None => Err(FetchError::Transport {
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
