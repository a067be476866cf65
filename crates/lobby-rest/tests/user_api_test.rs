//! HTTP-level tests for the `/api/users` endpoints.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use lobby_config::AppConfig;
use lobby_repository::InMemoryUserRepository;
use lobby_rest::{build_router, AppState, BaseUrlLinks};
use lobby_service::UserServiceImpl;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const BASE: &str = "http://lobby.test";

fn app() -> Router {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = Arc::new(UserServiceImpl::new(repository));
    let state = AppState::new(service, Arc::new(BaseUrlLinks::new(BASE)));
    build_router(state, &AppConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn create_user(app: &Router, login: &str, first: &str, last: &str) -> String {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/users",
            &json!({ "login": login, "firstName": first, "lastName": last }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/users",
            &json!({ "login": "ada1815", "firstName": "Ada", "lastName": "Lovelace" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();
    assert_eq!(location, format!("{}/api/users/{}", BASE, id));

    let response = send(&app, empty_request(Method::GET, &format!("/api/users/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["id"], id);
    assert_eq!(user["login"], "ada1815");
    assert_eq!(user["fullName"], "Ada Lovelace");
    assert_eq!(user["gamesPlayed"], 0);
    assert!(user["currentGameId"].is_null());
}

#[tokio::test]
async fn test_create_with_empty_login_is_unprocessable() {
    let app = app();

    let response = send(
        &app,
        json_request(Method::POST, "/api/users", &json!({ "login": "", "firstName": "A" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"]["login"][0], "required");
}

#[tokio::test]
async fn test_create_with_non_alphanumeric_login_is_unprocessable() {
    let app = app();

    let response = send(
        &app,
        json_request(Method::POST, "/api/users", &json!({ "login": "abc-1" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["login"][0], "must contain only letters and digits");
}

#[tokio::test]
async fn test_null_login_is_unprocessable() {
    let app = app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/users",
            &json!({ "login": null, "firstName": "A", "lastName": "B" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"]["login"][0], "required");

    let response = send(
        &app,
        json_request(
            Method::PUT,
            "/api/users/550e8400-e29b-41d4-a716-446655440000",
            &json!({ "login": null }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["errors"]["login"][0], "required");
}

#[tokio::test]
async fn test_null_names_are_empty() {
    let app = app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/users",
            &json!({ "login": "ab", "firstName": null, "lastName": "Byron" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = send(&app, empty_request(Method::GET, &format!("/api/users/{}", id))).await;
    assert_eq!(body_json(response).await["fullName"], " Byron");
}

#[tokio::test]
async fn test_create_without_body_is_bad_request() {
    let app = app();

    let response = send(&app, empty_request(Method::POST, "/api/users")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_from_xml_body() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/xml")
        .body(Body::from(
            "<user><login>grace</login><firstName>Grace</firstName><lastName>Hopper</lastName></user>",
        ))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = send(&app, empty_request(Method::GET, &format!("/api/users/{}", id))).await;
    assert_eq!(body_json(response).await["fullName"], "Grace Hopper");
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let app = app();

    let response = send(
        &app,
        empty_request(Method::GET, "/api/users/550e8400-e29b-41d4-a716-446655440000"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, empty_request(Method::GET, "/api/users/not-a-uuid")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_placeholder_id_is_bad_request() {
    let app = app();
    let uri = "/api/users/00000000-0000-0000-0000-000000000000";

    let response = send(&app, json_request(Method::PUT, uri, &json!({ "login": "nil" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, empty_request(Method::GET, "/api/users")).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_head_matches_get_without_body() {
    let app = app();
    let id = create_user(&app, "hopper", "Grace", "Hopper").await;
    let uri = format!("/api/users/{}", id);

    let get = send(&app, empty_request(Method::GET, &uri)).await;
    let head = send(&app, empty_request(Method::HEAD, &uri)).await;

    assert_eq!(head.status(), get.status());
    assert_eq!(head.status(), StatusCode::OK);
    assert!(body_bytes(head).await.is_empty());

    let missing = send(
        &app,
        empty_request(Method::HEAD, "/api/users/550e8400-e29b-41d4-a716-446655440000"),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_xml_representation() {
    let app = app();
    let id = create_user(&app, "ada", "Ada", "Lovelace").await;

    let request = Request::builder()
        .uri(format!("/api/users/{}", id))
        .header(header::ACCEPT, "application/xml")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));
    let xml = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(xml.starts_with("<user>"));
    assert!(xml.contains("<fullName>Ada Lovelace</fullName>"));
}

#[tokio::test]
async fn test_unsupported_accept_is_not_acceptable() {
    let app = app();
    let id = create_user(&app, "ada", "Ada", "Lovelace").await;

    let request = Request::builder()
        .uri(format!("/api/users/{}", id))
        .header(header::ACCEPT, "text/csv")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(body_json(response).await["code"], "NOT_ACCEPTABLE");
}

#[tokio::test]
async fn test_wildcard_and_suffix_accept_ranges() {
    let app = app();
    create_user(&app, "ada", "Ada", "Lovelace").await;

    let cases = [
        ("text/*", "application/xml"),
        ("application/*+xml", "application/xml"),
        ("text/json", "application/json"),
        ("application/*+json", "application/json"),
    ];
    for (accept, expected) in cases {
        let request = Request::builder()
            .uri("/api/users")
            .header(header::ACCEPT, accept)
            .body(Body::empty())
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK, "{}", accept);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with(expected),
            "{}",
            accept
        );
    }
}

#[tokio::test]
async fn test_not_acceptable_create_stores_nothing() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "text/csv")
        .body(Body::from(json!({ "login": "ghost" }).to_string()))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);

    let response = send(&app, empty_request(Method::GET, "/api/users")).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_is_clamped_and_paginated() {
    let app = app();
    for i in 0..25 {
        create_user(&app, &format!("user{}", i), "Test", "User").await;
    }

    let response = send(
        &app,
        empty_request(Method::GET, "/api/users?pageNumber=0&pageSize=100"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let header: Value =
        serde_json::from_str(response.headers()["x-pagination"].to_str().unwrap()).unwrap();
    assert_eq!(header["currentPage"], 1);
    assert_eq!(header["pageSize"], 20);
    assert_eq!(header["totalCount"], 25);
    assert_eq!(header["totalPages"], 2);
    assert!(header["previousPageLink"].is_null());
    assert_eq!(
        header["nextPageLink"],
        format!("{}/api/users?pageNumber=2&pageSize=20", BASE)
    );

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["login"], "user0");

    let response = send(&app, empty_request(Method::GET, "/api/users?pageNumber=2&pageSize=20")).await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
    assert_eq!(body[0]["login"], "user20");
}

#[tokio::test]
async fn test_list_defaults_and_out_of_range_page() {
    let app = app();
    create_user(&app, "only", "Only", "One").await;

    let response = send(&app, empty_request(Method::GET, "/api/users")).await;
    let header: Value =
        serde_json::from_str(response.headers()["x-pagination"].to_str().unwrap()).unwrap();
    assert_eq!(header["pageSize"], 10);
    assert_eq!(header["currentPage"], 1);

    let response = send(&app, empty_request(Method::GET, "/api/users?pageNumber=7")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let header: Value =
        serde_json::from_str(response.headers()["x-pagination"].to_str().unwrap()).unwrap();
    assert_eq!(header["totalCount"], 1);
    assert!(header["nextPageLink"].is_null());
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_saturates_oversized_page_number() {
    let app = app();
    create_user(&app, "only", "Only", "One").await;

    let response = send(
        &app,
        empty_request(Method::GET, "/api/users?pageNumber=99999999999999999999"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let header: Value =
        serde_json::from_str(response.headers()["x-pagination"].to_str().unwrap()).unwrap();
    assert_eq!(header["totalCount"], 1);
    assert!(header["nextPageLink"].is_null());
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_rejects_non_numeric_page() {
    let app = app();

    let response = send(&app, empty_request(Method::GET, "/api/users?pageNumber=abc")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_creates_then_replaces() {
    let app = app();
    let id = "550e8400-e29b-41d4-a716-446655440000";
    let uri = format!("/api/users/{}", id);

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            &json!({ "login": "first", "firstName": "First", "lastName": "Version" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("{}/api/users/{}", BASE, id).as_str()
    );
    assert_eq!(body_json(response).await["id"], id);

    let response = send(&app, empty_request(Method::GET, &uri)).await;
    let user = body_json(response).await;
    assert_eq!(user["login"], "first");
    assert_eq!(user["fullName"], "First Version");

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            &json!({ "login": "second", "firstName": "Second", "lastName": "Take" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, empty_request(Method::GET, &uri)).await;
    let user = body_json(response).await;
    assert_eq!(user["login"], "second");
    assert_eq!(user["fullName"], "Second Take");
}

#[tokio::test]
async fn test_put_without_body_is_bad_request() {
    let app = app();

    let response = send(
        &app,
        empty_request(Method::PUT, "/api/users/550e8400-e29b-41d4-a716-446655440000"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_unknown_user_is_not_found() {
    let app = app();

    let response = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/users/550e8400-e29b-41d4-a716-446655440000",
            &json!([{ "op": "replace", "path": "/login", "value": "x" }]),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_with_empty_login_leaves_user_unchanged() {
    let app = app();
    let id = create_user(&app, "keeper", "Kee", "Per").await;
    let uri = format!("/api/users/{}", id);

    let response = send(
        &app,
        json_request(
            Method::PATCH,
            &uri,
            &json!([{ "op": "replace", "path": "/login", "value": "" }]),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["errors"]["login"].is_array());

    let response = send(&app, empty_request(Method::GET, &uri)).await;
    let user = body_json(response).await;
    assert_eq!(user["login"], "keeper");
    assert_eq!(user["fullName"], "Kee Per");
}

#[tokio::test]
async fn test_patch_applies_operations() {
    let app = app();
    let id = create_user(&app, "before", "Old", "Name").await;
    let uri = format!("/api/users/{}", id);

    let response = send(
        &app,
        json_request(
            Method::PATCH,
            &uri,
            &json!([
                { "op": "replace", "path": "/login", "value": "after" },
                { "op": "add", "path": "/firstName", "value": "New" },
                { "op": "copy", "from": "/firstName", "path": "/lastName" }
            ]),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, empty_request(Method::GET, &uri)).await;
    let user = body_json(response).await;
    assert_eq!(user["login"], "after");
    assert_eq!(user["fullName"], "New New");
}

#[tokio::test]
async fn test_patch_without_document_is_bad_request() {
    let app = app();
    let id = create_user(&app, "someone", "Some", "One").await;

    let response = send(&app, empty_request(Method::PATCH, &format!("/api/users/{}", id))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = app();
    let id = create_user(&app, "doomed", "Doo", "Med").await;
    let uri = format!("/api/users/{}", id);

    let response = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, empty_request(Method::GET, &uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = app();

    let response = send(&app, empty_request(Method::GET, "/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");

    for path in ["/ready", "/live"] {
        let response = send(&app, empty_request(Method::GET, path)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(&app, empty_request(Method::GET, "/api-docs/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/users/{id}"].is_object());
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = app();

    let response = send(&app, empty_request(Method::GET, "/live")).await;

    assert!(response.headers().contains_key("x-request-id"));
}
