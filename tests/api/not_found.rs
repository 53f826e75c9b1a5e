use crate::helpers::spawn_app_testing;
use axum::http::StatusCode;

#[tokio::test]
async fn unmatched_routes_fall_back_to_404() {
    // Arrange
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    // Act
    let response = app.get("/does-not-exist").await;

    // Assert
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
