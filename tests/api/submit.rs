use crate::helpers::{spawn_app, spawn_app_with_store};
use kyphorantis_server::outbound::db::memory_db::InMemoryDb;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn concrete_submission() -> serde_json::Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "555-0114",
        "enquery": "Consulting",
    })
}

#[tokio::test]
async fn a_valid_submission_gets_a_200_with_the_assigned_id() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact_request(&concrete_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Service request received and email sent successfully"
    );
    assert!(body["result"]["insertedId"].is_string());
    assert!(body.get("emailError").is_none());
}

#[tokio::test]
async fn the_notification_goes_to_the_configured_account() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    app.post_contact_request(&concrete_submission()).await;

    // Assert
    let email_request = app.get_email_request().await;
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["From"], "owner@kyphorantis.com");
    assert_eq!(body["To"], "owner@kyphorantis.com");
    assert_eq!(body["ReplyTo"], "ada@example.com");
    assert_eq!(body["Subject"], "Kyphorantis Inquiry: New Message");
    let html = body["HtmlBody"].as_str().unwrap();
    assert!(html.contains("New Service Request"));
    assert!(html.contains("mailto:ada@example.com"));
    assert!(html.contains("Consulting"));
}

#[tokio::test]
async fn the_notification_subject_carries_the_submitted_subject() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut submission = concrete_submission();
    submission["subject"] = json!("Roof repair");

    // Act
    app.post_contact_request(&submission).await;

    // Assert
    let email_request = app.get_email_request().await;
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["Subject"], "Kyphorantis Inquiry: Roof repair");
    assert!(body["HtmlBody"].as_str().unwrap().contains("Roof repair"));
}

#[tokio::test]
async fn empty_optional_fields_fall_back_in_the_notification() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut submission = concrete_submission();
    submission["subject"] = json!("");
    submission["editionalInfo"] = json!("");

    // Act
    app.post_contact_request(&submission).await;

    // Assert
    let email_request = app.get_email_request().await;
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["Subject"], "Kyphorantis Inquiry: New Message");
    let html = body["HtmlBody"].as_str().unwrap();
    assert!(html.contains("General Inquiry"));
    assert!(html.contains("N/A"));
}

#[tokio::test]
async fn the_submission_is_kept_even_when_the_email_fails() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact_request(&concrete_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Saved to DB, but email failed");
    assert_eq!(body["emailError"], true);
    assert!(body["result"]["insertedId"].is_string());

    let records: serde_json::Value = app.get_contact_requests().await.json().await.unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn a_dead_store_means_a_500_and_no_notification() {
    // Arrange
    let app = spawn_app_with_store(InMemoryDb::unavailable()).await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact_request(&concrete_submission()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Internal Server Error");
    assert!(body["error"].as_str().unwrap().contains("not initialized"));
}

#[tokio::test]
async fn stored_submissions_come_back_unchanged() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let submission = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "source": "landing-page",
        "utm": { "campaign": "spring" },
    });

    // Act
    app.post_contact_request(&submission).await;

    // Assert
    let records: serde_json::Value = app.get_contact_requests().await.json().await.unwrap();
    let record = &records.as_array().unwrap()[0];
    assert!(record["_id"].is_string());
    assert_eq!(record["name"], "Ada Lovelace");
    assert_eq!(record["source"], "landing-page");
    assert_eq!(record["utm"]["campaign"], "spring");
    assert!(record.get("subject").is_none());
    assert!(record.get("editionalInfo").is_none());
}

#[tokio::test]
async fn scalar_fields_are_coerced_to_text() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_contact_request(&json!({ "name": true, "phone": 123 }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let records: serde_json::Value = app.get_contact_requests().await.json().await.unwrap();
    let record = &records.as_array().unwrap()[0];
    assert_eq!(record["name"], "true");
    assert_eq!(record["phone"], "123");
}

#[tokio::test]
async fn an_empty_body_is_still_accepted() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact_request(&json!({})).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["result"]["insertedId"].is_string());
}
