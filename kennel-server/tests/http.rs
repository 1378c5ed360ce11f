use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use kennel_core::KennelConfig;
use kennel_server::build;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> axum::Router {
    build(KennelConfig::new()).unwrap().router()
}

async fn send(router: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(req).await.unwrap()
}

async fn body_bytes(res: axum::response::Response) -> Vec<u8> {
    res.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body(res: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

fn rex() -> Value {
    json!({"name": "Rex", "breed": "Lab", "description": "Friendly", "age": 3})
}

#[tokio::test]
async fn health_ok() {
    let res = send(&router(), "GET", "/health", None).await;

    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(body_bytes(res).await, b"ok");
}

#[tokio::test]
async fn create_returns_201_with_assigned_id() {
    let res = send(&router(), "POST", "/dogs", Some(rex())).await;

    assert_eq!(res.status().as_u16(), 201);
    assert!(res.headers().get("x-request-id").is_some());
    assert_eq!(
        json_body(res).await,
        json!({"id": 1, "name": "Rex", "breed": "Lab", "description": "Friendly", "age": 3})
    );
}

#[tokio::test]
async fn create_with_missing_fields_is_400() {
    let res = send(&router(), "POST", "/dogs", Some(json!({"name": "Rex"}))).await;

    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(json_body(res).await, json!({"error": "Invalid input data"}));
}

#[tokio::test]
async fn created_dog_round_trips_byte_for_byte() {
    let router = router();

    let created = body_bytes(send(&router, "POST", "/dogs", Some(rex())).await).await;
    let fetched = send(&router, "GET", "/dogs/1", None).await;

    assert_eq!(fetched.status().as_u16(), 200);
    assert_eq!(body_bytes(fetched).await, created);
}

#[tokio::test]
async fn ids_are_unique_across_creates() {
    let router = router();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let body = json_body(send(&router, "POST", "/dogs", Some(rex())).await).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    ids.dedup();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn get_of_unknown_id_is_204_with_empty_body() {
    let res = send(&router(), "GET", "/dogs/999", None).await;

    assert_eq!(res.status().as_u16(), 204);
    assert!(body_bytes(res).await.is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let res = send(&router(), "GET", "/dogs/abc", None).await;

    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(json_body(res).await, json!({"message": "id should be a number"}));
}

#[tokio::test]
async fn patch_changes_only_given_fields_and_answers_201() {
    let router = router();
    send(&router, "POST", "/dogs", Some(rex())).await;

    let res = send(&router, "PATCH", "/dogs/1", Some(json!({"age": 4}))).await;
    assert_eq!(res.status().as_u16(), 201);
    assert_eq!(
        json_body(res).await,
        json!({"id": 1, "name": "Rex", "breed": "Lab", "description": "Friendly", "age": 4})
    );

    let res = send(&router, "GET", "/dogs/1", None).await;
    assert_eq!(json_body(res).await["age"], 4);
}

#[tokio::test]
async fn empty_patch_is_a_noop_update() {
    let router = router();
    send(&router, "POST", "/dogs", Some(rex())).await;

    let res = send(&router, "PATCH", "/dogs/1", Some(json!({}))).await;
    assert_eq!(res.status().as_u16(), 201);
    assert_eq!(json_body(res).await["name"], "Rex");
}

#[tokio::test]
async fn patch_without_body_is_a_noop_update() {
    let router = router();
    send(&router, "POST", "/dogs", Some(rex())).await;

    let res = send(&router, "PATCH", "/dogs/1", None).await;
    assert_eq!(res.status().as_u16(), 201);
    assert_eq!(
        json_body(res).await,
        json!({"id": 1, "name": "Rex", "breed": "Lab", "description": "Friendly", "age": 3})
    );
}

#[tokio::test]
async fn patch_with_wrong_type_is_400_and_leaves_dog_unchanged() {
    let router = router();
    send(&router, "POST", "/dogs", Some(rex())).await;

    let res = send(&router, "PATCH", "/dogs/1", Some(json!({"name": "Max", "age": "old"}))).await;
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(json_body(res).await, json!({"error": "Invalid input data"}));

    let res = send(&router, "GET", "/dogs/1", None).await;
    assert_eq!(json_body(res).await["name"], "Rex");
}

#[tokio::test]
async fn patch_of_unknown_id_is_500() {
    let res = send(&router(), "PATCH", "/dogs/42", Some(json!({"age": 4}))).await;

    assert_eq!(res.status().as_u16(), 500);
    assert_eq!(
        json_body(res).await,
        json!({"error": "An error occurred while updating the dog."})
    );
}

#[tokio::test]
async fn delete_returns_pre_deletion_dog_then_get_is_204() {
    let router = router();
    send(&router, "POST", "/dogs", Some(rex())).await;

    let res = send(&router, "DELETE", "/dogs/1", None).await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(
        json_body(res).await,
        json!({"id": 1, "name": "Rex", "breed": "Lab", "description": "Friendly", "age": 3})
    );

    let res = send(&router, "GET", "/dogs/1", None).await;
    assert_eq!(res.status().as_u16(), 204);
}

#[tokio::test]
async fn delete_of_unknown_id_is_204_and_keeps_count() {
    let router = router();
    send(&router, "POST", "/dogs", Some(rex())).await;

    let res = send(&router, "DELETE", "/dogs/999", None).await;
    assert_eq!(res.status().as_u16(), 204);
    assert!(body_bytes(res).await.is_empty());

    let res = send(&router, "GET", "/dogs", None).await;
    assert_eq!(json_body(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_returns_live_dogs_only() {
    let router = router();

    let res = send(&router, "GET", "/dogs", None).await;
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(json_body(res).await, json!([]));

    for name in ["Rex", "Bella", "Max"] {
        let mut dog = rex();
        dog["name"] = json!(name);
        send(&router, "POST", "/dogs", Some(dog)).await;
    }
    send(&router, "DELETE", "/dogs/2", None).await;

    let res = send(&router, "GET", "/dogs", None).await;
    let body = json_body(res).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Rex", "Max"]);
}
