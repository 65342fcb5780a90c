#![allow(dead_code)]

use async_trait::async_trait;
use primewatch::error::{AppError, AppResult};
use primewatch::http::HttpGet;
use std::sync::Mutex;
use std::time::Duration;

struct Route {
    needle: String,
    body: AppResult<String>,
    delay_ms: u64,
}

/// Canned-response transport for driving the source without a network.
///
/// Routes match by substring against the requested URL, first match wins, so
/// more specific needles must be registered first. Every request is recorded
/// for assertions.
pub struct StubHttp {
    routes: Vec<Route>,
    requests: Mutex<Vec<String>>,
}

impl StubHttp {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport with no routes: every request fails.
    pub fn failing() -> Self {
        Self::new()
    }

    pub fn with_body(mut self, needle: &str, body: impl Into<String>) -> Self {
        self.routes.push(Route {
            needle: needle.to_string(),
            body: Ok(body.into()),
            delay_ms: 0,
        });
        self
    }

    pub fn with_json(self, needle: &str, body: serde_json::Value) -> Self {
        self.with_body(needle, body.to_string())
    }

    pub fn with_error(mut self, needle: &str) -> Self {
        self.routes.push(Route {
            needle: needle.to_string(),
            body: Err(AppError::ApiError("stubbed upstream failure".to_string())),
            delay_ms: 0,
        });
        self
    }

    /// Like [`with_body`](Self::with_body) but responding only after a
    /// delay, for arrival-order tests.
    pub fn with_delayed_body(mut self, needle: &str, body: impl Into<String>, delay_ms: u64) -> Self {
        self.routes.push(Route {
            needle: needle.to_string(),
            body: Ok(body.into()),
            delay_ms,
        });
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpGet for StubHttp {
    async fn get(&self, url: &str) -> AppResult<String> {
        self.requests.lock().unwrap().push(url.to_string());

        for route in &self.routes {
            if url.contains(&route.needle) {
                if route.delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(route.delay_ms)).await;
                }
                return route.body.clone();
            }
        }
        Err(AppError::NotFound(format!("No stub route for {}", url)))
    }
}

/// Listing envelope with sequentially numbered raw titles.
pub fn listing_json(prefix: &str, count: usize, page: u32, total_pages: u32) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": format!("{}{}", prefix, i),
                "overview": format!("About {}{}", prefix, i),
                "poster_path": format!("/{}{}.jpg", prefix.to_lowercase(), i)
            })
        })
        .collect();
    serde_json::json!({
        "page": page,
        "results": results,
        "total_pages": total_pages
    })
}
