//! Transactional email contract.
//!
//! Each notification kind carries its own payload; the tagged enum keeps
//! the field sets disjoint and checked at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Typed message payload for the email service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    PaymentApproved {
        order_id: String,
        customer_email: String,
    },
    PaymentRejected {
        order_id: String,
        customer_email: String,
        reason: Option<String>,
    },
    OrderShipped {
        order_id: String,
        customer_email: String,
        tracking_code: String,
    },
    OrderDelivered {
        order_id: String,
        customer_email: String,
    },
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::PaymentApproved { .. } => "payment_approved",
            Notification::PaymentRejected { .. } => "payment_rejected",
            Notification::OrderShipped { .. } => "order_shipped",
            Notification::OrderDelivered { .. } => "order_delivered",
        }
    }

    pub fn customer_email(&self) -> &str {
        match self {
            Notification::PaymentApproved { customer_email, .. }
            | Notification::PaymentRejected { customer_email, .. }
            | Notification::OrderShipped { customer_email, .. }
            | Notification::OrderDelivered { customer_email, .. } => customer_email,
        }
    }
}

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Send failed: {0}")]
    Send(String),
}

/// Dispatches one notification email. Failures are surfaced, never
/// retried here.
pub trait NotificationSender {
    fn send(
        &self,
        notification: &Notification,
    ) -> impl std::future::Future<Output = Result<(), NotificationError>> + Send;
}

/// Records dispatched notifications. Test double.
#[derive(Debug, Default)]
pub struct MemorySender {
    sent: RwLock<Vec<Notification>>,
}

impl MemorySender {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.read().await.clone()
    }
}

impl NotificationSender for MemorySender {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.sent.write().await.push(notification.clone());
        Ok(())
    }
}
