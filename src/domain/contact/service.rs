use async_trait::async_trait;

use super::{
    models::{
        notification::EmailMessage,
        record::{SubmissionReceipt, SubmissionRecord},
        submission::ContactSubmission,
    },
    ports::{ContactService, ContactServiceError, SubmissionNotifier, SubmissionStore},
};

#[derive(Debug)]
pub struct ContactIntake<S, N>
where
    S: SubmissionStore,
    N: SubmissionNotifier,
{
    pub store: S,
    pub notifier: N,
}

impl<S, N> ContactIntake<S, N>
where
    S: SubmissionStore,
    N: SubmissionNotifier,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }
}

#[async_trait]
impl<S, N> ContactService for ContactIntake<S, N>
where
    S: SubmissionStore,
    N: SubmissionNotifier,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ContactServiceError> {
        let id = self
            .store
            .insert(&submission)
            .await
            .map_err(ContactServiceError::Store)?;

        // The submission is already persisted at this point. A notification
        // failure is reported on the receipt, never as an error.
        let message = EmailMessage::for_submission(&submission);
        let notified = match self.notifier.send_notification(&message).await {
            Ok(()) => {
                tracing::info!("Notification email sent");
                true
            }
            Err(error) => {
                tracing::error!(
                    error.cause_chain = ?error,
                    "Failed to send the notification email",
                );
                false
            }
        };

        Ok(SubmissionReceipt { id, notified })
    }

    async fn list(&self) -> Result<Vec<SubmissionRecord>, ContactServiceError> {
        self.store
            .fetch_all()
            .await
            .map_err(ContactServiceError::List)
    }
}
