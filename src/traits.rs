use crate::activity::ActivityRecord;
use crate::notifications::{Delivery, DispatchError};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Trait for delivering activity notifications
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Render and send one notification for the given activity
    async fn dispatch(&self, activity: &ActivityRecord) -> Result<Delivery, DispatchError>;
}
