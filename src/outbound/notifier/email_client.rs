use crate::configuration::EmailClientSettings;
use crate::domain::contact::{
    models::notification::EmailMessage,
    ports::{SubmissionNotifier, SubmissionNotifierError},
};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Sends owner notifications through the provider's HTTP API. The configured
/// account is both the sender and the recipient.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(configuration: EmailClientSettings) -> Self {
        let timeout = configuration.timeout();

        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url: configuration.base_url,
            sender: configuration.sender_email,
            authorization_token: configuration.authorization_token,
        }
    }
}

#[async_trait]
impl SubmissionNotifier for EmailClient {
    #[tracing::instrument(name = "Sending a contact notification email", skip(self, message))]
    async fn send_notification(
        &self,
        message: &EmailMessage,
    ) -> Result<(), SubmissionNotifierError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: &self.sender,
            subject: message.subject(),
            html_body: message.html_body(),
            reply_to: message.reply_to(),
        };
        let response = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SubmissionNotifierError::Unexpected(anyhow::Error::from(e)))?;

        response
            .error_for_status()
            .map_err(|error| match error.status() {
                Some(status) => SubmissionNotifierError::Rejected(status.to_string()),
                None => SubmissionNotifierError::Unexpected(anyhow::Error::from(error)),
            })?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}
