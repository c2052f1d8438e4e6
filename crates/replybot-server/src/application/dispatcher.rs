//! Background dispatch of webhook notifications
//!
//! The webhook handler acknowledges first and hands the body over here.
//! Tasks are tracked so shutdown can wait for in-flight replies.

use axum::body::Bytes;
use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tracing::debug;

use super::reply_service::ReplyService;

#[derive(Clone)]
pub struct Dispatcher {
    service: Arc<ReplyService>,
    tracker: TaskTracker,
}

impl Dispatcher {
    pub fn new(service: Arc<ReplyService>) -> Self {
        Self {
            service,
            tracker: TaskTracker::new(),
        }
    }

    /// Process a notification in the background; returns immediately
    pub fn dispatch(&self, payload: Bytes, signature: Option<String>) {
        let service = Arc::clone(&self.service);
        self.tracker.spawn(async move {
            let outcome = service.handle(&payload, signature.as_deref()).await;
            debug!(
                outcome = %outcome,
                attempted_send = outcome.attempted_send(),
                "Notification processed"
            );
        });
    }

    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Stop tracking new work and wait for in-flight replies
    pub async fn shutdown(&self) {
        self.tracker.close();
        let in_flight = self.in_flight();
        if in_flight > 0 {
            tracing::info!(in_flight = in_flight, "⏳ Waiting for in-flight replies");
        }
        self.tracker.wait().await;
    }
}
