//! Mailer Implementations
//!
//! - **InMemoryMailer**: records every message, used by tests and the `memory` mailer backend
//! - **LogMailer**: writes every message to the tracing output

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Email, Mailer};
use crate::shared::error::AppError;

/// Keeps every sent email in memory.
#[derive(Debug, Default)]
pub struct InMemoryMailer {
    sent_emails: Mutex<Vec<Email>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the emails sent so far, in order.
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent_emails.lock().clone()
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: Email) -> Result<(), AppError> {
        self.sent_emails.lock().push(email);
        Ok(())
    }
}

/// Logs emails instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), AppError> {
        tracing::info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            "Email sent"
        );
        tracing::debug!(body = %email.body, "Email body");
        Ok(())
    }
}
