//! Common test utilities for relay integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use axum::Router;
use axum_test::TestServer;
use contact_relay::{routes, AppState, AuditLog, EmailSender, InMemoryAuditLog, OutgoingEmail};

pub const DESTINATION: &str = "owner@example.com";

/// Mock email sender that captures notifications
#[derive(Default, Clone)]
pub struct MockEmailSender {
    /// Captured notifications, in send order
    pub sent: Arc<RwLock<Vec<OutgoingEmail>>>,
    fail: Arc<AtomicBool>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following send fail
    pub fn fail_deliveries(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.read().unwrap().clone()
    }
}

impl EmailSender for MockEmailSender {
    fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("connection refused by smtp.internal:25".to_string());
        }
        self.sent.write().unwrap().push(email.clone());
        Ok(())
    }
}

/// Build the relay router around the given collaborators
pub fn create_app<A>(email_sender: MockEmailSender, audit_log: A) -> Router
where
    A: AuditLog + 'static,
{
    let state = Arc::new(AppState::new(email_sender, audit_log, DESTINATION));
    routes::create_router_with_static_path(state, "tests/static")
}

/// Create a test server with a mock sender and an in-memory audit log
pub fn create_test_server() -> (TestServer, MockEmailSender, InMemoryAuditLog) {
    let email_sender = MockEmailSender::new();
    let audit_log = InMemoryAuditLog::new();

    let app = create_app(email_sender.clone(), audit_log.clone());
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, email_sender, audit_log)
}
