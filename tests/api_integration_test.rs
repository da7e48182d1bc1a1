use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use storekeep::db;
use storekeep::infrastructure::AppState;
use storekeep::server::build_router;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a router over a fresh in-memory database
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    build_router(AppState::new(db), &[])
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, location, body)
}

fn post_customer(payload: &Value) -> Request<Body> {
    Request::builder()
        .uri("/customers/create")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn get_customer(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/customers/{id}"))
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn alice() -> Value {
    json!({"name": "Alice Doe", "email": "alice@example.com", "phone": "1234567890"})
}

#[tokio::test]
async fn test_create_customer() {
    let app = setup_test_app().await;

    let (status, location, body) = send(&app, post_customer(&alice())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Customer created successfully"}));
    assert_eq!(location.as_deref(), Some("/customers/1"));
}

#[tokio::test]
async fn test_get_customer_after_create() {
    let app = setup_test_app().await;
    send(&app, post_customer(&alice())).await;

    let (status, _, body) = send(&app, get_customer("1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, alice());
}

#[tokio::test]
async fn test_get_customer_not_found() {
    let app = setup_test_app().await;

    let (status, _, body) = send(&app, get_customer("9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Customer not found"}));
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let app = setup_test_app().await;
    send(&app, post_customer(&alice())).await;

    let first = send(&app, get_customer("1")).await;
    let second = send(&app, get_customer("1")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_duplicate_email_creates_one_record() {
    let app = setup_test_app().await;

    let (status, _, _) = send(&app, post_customer(&alice())).await;
    assert_eq!(status, StatusCode::CREATED);

    let duplicate = json!({"name": "Alice Again", "email": "alice@example.com", "phone": "555"});
    let (status, location, body) = send(&app, post_customer(&duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(location.is_none());
    assert_eq!(
        body,
        json!({"message": "Customer with this email already exists"})
    );

    // Original untouched, no second row
    let (_, _, body) = send(&app, get_customer("1")).await;
    assert_eq!(body, alice());
    let (status, _, _) = send(&app, get_customer("2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_email_is_stored_as_given() {
    let app = setup_test_app().await;

    let customer = json!({"name": "Alice", "email": "alice", "phone": " "});
    let (status, _, body) = send(&app, post_customer(&customer)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Customer created successfully"}));

    let (status, _, body) = send(&app, get_customer("1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, customer);
}

#[tokio::test]
async fn test_duplicate_email_ignores_case() {
    let app = setup_test_app().await;

    let (status, _, _) = send(&app, post_customer(&alice())).await;
    assert_eq!(status, StatusCode::CREATED);

    let shouting = json!({"name": "Alice Doe", "email": "ALICE@Example.com", "phone": "1234567890"});
    let (status, _, _) = send(&app, post_customer(&shouting)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _, _) = send(&app, get_customer("2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_each_customer_gets_its_own_id() {
    let app = setup_test_app().await;

    let customers = [
        json!({"name": "Alice Doe", "email": "alice@example.com", "phone": "1234567890"}),
        json!({"name": "Bob Roe", "email": "bob@example.com", "phone": "0987654321"}),
        json!({"name": "Carol Poe", "email": "carol@example.com", "phone": "5550100"}),
    ];

    for (i, customer) in customers.iter().enumerate() {
        let (status, location, _) = send(&app, post_customer(customer)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(location, Some(format!("/customers/{}", i + 1)));
    }

    for (i, customer) in customers.iter().enumerate() {
        let (status, _, body) = send(&app, get_customer(&(i + 1).to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body, customer);
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "storekeep");
}

#[tokio::test]
async fn test_openapi_document_lists_customer_routes() {
    let app = setup_test_app().await;

    let req = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/customers/create"]["post"].is_object());
    assert!(body["paths"]["/customers/{customer_id}"]["get"].is_object());
}
