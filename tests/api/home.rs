use crate::helpers::{spawn_app, spawn_app_with_store};
use kyphorantis_server::outbound::db::memory_db::InMemoryDb;

#[tokio::test]
async fn home_returns_the_running_banner() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = reqwest::Client::new()
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    assert_eq!(
        response.text().await.unwrap(),
        "Kyphorantis project server is running..."
    );
}

#[tokio::test]
async fn home_stays_reachable_when_the_store_never_connected() {
    // Arrange
    let app = spawn_app_with_store(InMemoryDb::unavailable()).await;

    // Act
    let response = reqwest::Client::new()
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
}

#[tokio::test]
async fn preflight_requests_are_allowed_from_any_origin() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/contact-request", &app.address),
        )
        .header("Origin", "https://kyphorantis.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_some());
}
