use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::{Extension, Router};
use serde_json::{Value, json};
use tln_database::Database;
use tln_domain::config::ApiConfig;
use tln_kernel::prelude::{ApiState, Caller};
use tower::ServiceExt;

async fn app(ns: &str) -> Router {
    let db = Database::builder()
        .url("mem://")
        .session(ns, "users")
        .migrations(tln_user::MIGRATIONS)
        .init()
        .await
        .expect("connect to mem://");

    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(db.clone())
        .register_slice(tln_user::init(&db))
        .build()
        .expect("state");

    let (router, _) = tln_user::router().split_for_parts();
    router.with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn delete(id: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(format!("/users/{id}")).body(Body::empty()).unwrap()
}

async fn register(app: &Router, username: &str) -> String {
    let body = json!({ "username": username, "password": "hunter22", "email": format!("{username}@example.com") });
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, user) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.get("password").is_none());
    user["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn register_then_get() {
    let app = app("http_users_get_ns").await;
    let id = register(&app, "somchai").await;

    let request = Request::builder().uri(format!("/users/{id}")).body(Body::empty()).unwrap();
    let (status, user) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "somchai");

    let request = Request::builder().uri("/users/U404").body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": "NOT_FOUND", "message": "User not found" }));
}

#[tokio::test]
async fn delete_requires_a_caller() {
    let app = app("http_users_anon_ns").await;
    let id = register(&app, "somchai").await;

    let (status, body) = send(app, delete(&id)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn delete_is_limited_to_own_account() {
    let app = app("http_users_delete_ns").await;
    let id = register(&app, "somchai").await;

    let intruder = app.clone().layer(Extension(Caller::new("someone-else")));
    let (status, body) = send(intruder, delete(&id)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You are not authorized to delete this user");

    let owner = app.layer(Extension(Caller::new(id.clone())));
    let (status, body) = send(owner, delete(&id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted successfully", "userId": id }));
}
