use async_trait::async_trait;

use super::models::{
    notification::EmailMessage,
    record::{SubmissionId, SubmissionReceipt, SubmissionRecord},
    submission::ContactSubmission,
};

/// Represents a store of contact submissions
#[async_trait]
pub trait SubmissionStore: Send + Sync + 'static {
    /// Asynchronously persists a submission and returns the identifier the
    /// store assigned to it
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionId, SubmissionStoreError>;

    /// Asynchronously retrieves every stored submission, oldest first
    async fn fetch_all(&self) -> Result<Vec<SubmissionRecord>, SubmissionStoreError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionStoreError {
    #[error("The database client is not initialized")]
    Unavailable,

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Delivers the owner notification raised by a submission
#[async_trait]
pub trait SubmissionNotifier: Send + Sync + 'static {
    async fn send_notification(
        &self,
        message: &EmailMessage,
    ) -> Result<(), SubmissionNotifierError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionNotifierError {
    #[error("The email provider rejected the notification: {0}")]
    Rejected(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Stores a submission, then tries to notify the site owner. The receipt
    /// says whether the notification went out; a notification failure is not
    /// an error once the submission is stored.
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ContactServiceError>;

    async fn list(&self) -> Result<Vec<SubmissionRecord>, ContactServiceError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ContactServiceError {
    #[error("Failed to store the contact request")]
    Store(#[source] SubmissionStoreError),

    #[error("Failed to read stored contact requests")]
    List(#[source] SubmissionStoreError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
