use chrono::{Datelike, Utc};

use crate::domain::contact::models::submission::ContactSubmission;

const SUBJECT_PREFIX: &str = "Kyphorantis Inquiry";
const DEFAULT_MAIL_SUBJECT: &str = "New Message";
const DEFAULT_DISPLAY_SUBJECT: &str = "General Inquiry";
const DEFAULT_NOTE: &str = "N/A";

const STYLE: &str = r#"body { font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; background-color: #f4f4f4; margin: 0; padding: 0; }
    .container { max-width: 600px; margin: 20px auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
    .header { background-color: #73AF6F; color: #ffffff; padding: 24px; text-align: center; }
    .header h2 { margin: 0; font-size: 24px; font-weight: 600; }
    .content { padding: 30px; }
    .field-row { border-bottom: 1px solid #eeeeee; padding: 12px 0; display: flex; }
    .field-label { width: 140px; font-weight: bold; color: #555555; flex-shrink: 0; }
    .field-value { color: #333333; line-height: 1.5; }
    .footer { background-color: #f9fafb; padding: 15px; text-align: center; font-size: 12px; color: #888888; }
    .highlight { color: #73AF6F; font-weight: bold; }"#;

/// The owner-facing notification rendered from a submission: a subject line,
/// an HTML body and an optional reply-to address. Building one cannot fail,
/// whatever the submission looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    subject: String,
    html_body: String,
    reply_to: Option<String>,
}

impl EmailMessage {
    /// Renders the notification for a submission. Missing and empty fields
    /// fall back to placeholders ("General Inquiry" for the subject, "N/A"
    /// for the note); the reply-to is only set when the submitter left a
    /// non-empty email.
    pub fn for_submission(submission: &ContactSubmission) -> EmailMessage {
        let subject = format!(
            "{}: {}",
            SUBJECT_PREFIX,
            text_or(&submission.subject, DEFAULT_MAIL_SUBJECT)
        );
        let reply_to = submission.email.clone().filter(|email| !email.is_empty());
        Self {
            subject,
            html_body: render_html(submission),
            reply_to,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }
}

/// Absent and empty text both count as "not provided".
fn text_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
    match field.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

fn text_or_empty(field: &Option<String>) -> &str {
    text_or(field, "")
}

fn render_html(submission: &ContactSubmission) -> String {
    let email = text_or_empty(&submission.email);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    {style}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h2>New Service Request</h2>
    </div>
    <div class="content">
      <p style="margin-bottom: 20px; color: #666;">You have received a new inquiry via the <strong>Kyphorantis</strong> website.</p>

      <div class="field-row">
        <div class="field-label">Subject</div>
        <div class="field-value highlight">{subject}</div>
      </div>

      <div class="field-row">
        <div class="field-label">Name</div>
        <div class="field-value">{name}</div>
      </div>

      <div class="field-row">
        <div class="field-label">Email</div>
        <div class="field-value"><a href="mailto:{email}" style="color: #73AF6F; text-decoration: none;">{email}</a></div>
      </div>

      <div class="field-row">
        <div class="field-label">Phone</div>
        <div class="field-value">{phone}</div>
      </div>

      <div class="field-row">
        <div class="field-label">Service Type</div>
        <div class="field-value">{service_type}</div>
      </div>

      <div class="field-row" style="border-bottom: none;">
        <div class="field-label">Note</div>
        <div class="field-value">{note}</div>
      </div>
    </div>

    <div class="footer">
      <p>&copy; {year} Kyphorantis Server Automation.</p>
    </div>
  </div>
</body>
</html>"#,
        style = STYLE,
        subject = text_or(&submission.subject, DEFAULT_DISPLAY_SUBJECT),
        name = text_or_empty(&submission.name),
        email = email,
        phone = text_or_empty(&submission.phone),
        service_type = text_or_empty(&submission.enquery),
        note = text_or(&submission.editional_info, DEFAULT_NOTE),
        year = Utc::now().year(),
    )
}
