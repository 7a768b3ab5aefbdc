//! Integration tests for the user registry endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

#[path = "../common/mod.rs"]
mod common;
use common::*;

fn new_user(email: &str, mobile_no: &str) -> Value {
    json!({
        "fname": "Ada",
        "lname": "Lovelace",
        "email": email,
        "mobile_no": mobile_no,
        "gender": "F",
    })
}

#[tokio::test]
async fn test_create_user_answers_with_message() {
    let (app, _) = test_app(Deployment::Users);

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(new_user("ada@example.com", "5551234567")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "User added successfully"}));
}

#[tokio::test]
async fn test_create_user_duplicates_name_the_field() {
    let (app, _) = test_app(Deployment::Users);
    send(&app, "POST", "/users", Some(new_user("ada@example.com", "5551234567"))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(new_user("ada@example.com", "5550000000")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "A user with this email already exists.");

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(new_user("bob@example.com", "5551234567")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "A user with this mobile number already exists.");
}

#[tokio::test]
async fn test_create_user_requires_mobile_number() {
    let (app, _) = test_app(Deployment::Users);

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"fname": "A", "lname": "B", "email": "a@b.com", "mobile_no": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The field 'mobile_no' is required and cannot be empty."
    );
}

#[tokio::test]
async fn test_list_and_get_users() {
    let (app, state) = test_app(Deployment::Users);

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No users found in the database.");

    let user = {
        let mut conn = state.db.get().unwrap();
        create_test_user(&mut conn, "ada@example.com", "5551234567")
    };

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([serde_json::to_value(&user).unwrap()]));

    let (status, body) = send(&app, "GET", &format!("/users/{}", user.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mobile_no"], "5551234567");

    let (status, body) = send(&app, "GET", "/users/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "This User is not present");
}

#[tokio::test]
async fn test_update_user_replaces_record() {
    let (app, state) = test_app(Deployment::Users);
    let user = {
        let mut conn = state.db.get().unwrap();
        create_test_user(&mut conn, "ada@example.com", "5551234567")
    };
    let uri = format!("/users/{}", user.id);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({
            "fname": "Augusta",
            "lname": "King",
            "email": "ada@example.com",
            "mobile_no": "5551234567",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User updated successfully"}));

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["fname"], "Augusta");
    assert_eq!(body["gender"], Value::Null, "omitted optional fields are cleared");
}

#[tokio::test]
async fn test_update_user_validates_and_checks_existence() {
    let (app, state) = test_app(Deployment::Users);
    {
        let mut conn = state.db.get().unwrap();
        create_test_user(&mut conn, "ada@example.com", "5551234567");
    }

    let (status, body) = send(&app, "PUT", "/users/1", Some(json!({"fname": "Only"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The field 'lname' is required and cannot be empty."
    );

    let (status, body) = send(
        &app,
        "PUT",
        "/users/2",
        Some(new_user("bob@example.com", "5550000000")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "This User is not present");
}

#[tokio::test]
async fn test_update_unknown_user_reports_missing_before_validating() {
    let (app, _) = test_app(Deployment::Users);

    let (status, body) = send(&app, "PUT", "/users/999", Some(json!({"fname": "x"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "This User is not present");
}

#[tokio::test]
async fn test_delete_user_twice() {
    let (app, state) = test_app(Deployment::Users);
    {
        let mut conn = state.db.get().unwrap();
        create_test_user(&mut conn, "ada@example.com", "5551234567");
    }

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "This User is not present");
}

#[tokio::test]
async fn test_users_deployment_does_not_serve_organisations() {
    let (app, _) = test_app(Deployment::Users);

    let (status, _) = send(&app, "GET", "/organisations", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
