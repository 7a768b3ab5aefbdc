//! Integration tests for the organisation endpoints.

use axum::http::StatusCode;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::*;

#[tokio::test]
async fn test_create_organisation_echoes_record() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(
        &app,
        "POST",
        "/organisation",
        Some(json!({"code": 1, "org_name": "Acme", "details": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create should return 201");
    assert_eq!(body, json!({"code": 1, "org_name": "Acme", "details": "x"}));
}

#[tokio::test]
async fn test_create_organisation_requires_every_field() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(
        &app,
        "POST",
        "/organisation",
        Some(json!({"code": 1, "org_name": "Acme"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The field 'details' is required and cannot be empty."
    );
}

#[tokio::test]
async fn test_create_organisation_rejects_zero_code() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(
        &app,
        "POST",
        "/organisation",
        Some(json!({"code": 0, "org_name": "Acme", "details": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "zero counts as empty");
    assert_eq!(
        body["message"],
        "The field 'code' is required and cannot be empty."
    );
}

#[tokio::test]
async fn test_create_duplicate_code_names_field() {
    let (app, _) = test_app(Deployment::Organisations);
    let input = json!({"code": 1, "org_name": "Acme", "details": "x"});

    let (first, _) = send(&app, "POST", "/organisation", Some(input.clone())).await;
    let (second, body) = send(&app, "POST", "/organisation", Some(input)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "An organisation with this code already exists."
    );
}

#[tokio::test]
async fn test_overlong_name_is_internal_error_with_details() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(
        &app,
        "POST",
        "/organisation",
        Some(json!({"code": 1, "org_name": "x".repeat(21), "details": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An unexpected error occurred.");
    assert!(
        body["details"].as_str().is_some_and(|d| d.contains("CHECK")),
        "500 body should carry the store message: {}",
        body
    );
}

#[tokio::test]
async fn test_list_organisations_empty_is_not_found() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(&app, "GET", "/organisations", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No organisations found in the database.");
}

#[tokio::test]
async fn test_list_and_get_organisations() {
    let (app, state) = test_app(Deployment::Organisations);
    {
        let mut conn = state.db.get().unwrap();
        create_test_org(&mut conn, 1, "Acme");
        create_test_org(&mut conn, 2, "Globex");
    }

    let (status, body) = send(&app, "GET", "/organisations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, body) = send(&app, "GET", "/organisation/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["org_name"], "Globex");

    let (status, body) = send(&app, "GET", "/organisation/name/Acme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 1);

    let (status, body) = send(&app, "GET", "/organisation/name/Initech", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Organisation not found");
}

#[tokio::test]
async fn test_get_unknown_or_malformed_code_is_not_found() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(&app, "GET", "/organisation/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Organisation not found");

    let (status, _) = send(&app, "GET", "/organisation/acme", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_organisation_is_partial() {
    let (app, state) = test_app(Deployment::Organisations);
    {
        let mut conn = state.db.get().unwrap();
        create_test_org(&mut conn, 1, "Acme");
    }

    let (status, body) = send(
        &app,
        "PUT",
        "/organisation/1",
        Some(json!({"details": "rockets", "founded": 1949})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"code": 1, "org_name": "Acme", "details": "rockets"})
    );
}

#[tokio::test]
async fn test_update_unknown_organisation_is_not_found() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, body) = send(
        &app,
        "PUT",
        "/organisation/5",
        Some(json!({"details": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Organisation not found");
}

#[tokio::test]
async fn test_delete_organisation_then_get_is_not_found() {
    let (app, state) = test_app(Deployment::Organisations);
    {
        let mut conn = state.db.get().unwrap();
        create_test_org(&mut conn, 1, "Acme");
    }

    let (status, body) = send(&app, "DELETE", "/organisation/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Organisation deleted successfully");

    let (status, _) = send(&app, "GET", "/organisation/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/organisation/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "second delete finds nothing");
}

#[tokio::test]
async fn test_organisations_deployment_hides_users() {
    let (app, _) = test_app(Deployment::Organisations);

    let (status, _) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
