//! Authentication flow integration tests
//!
//! End-to-end over the local Rocket client: login happy path, generic
//! rejection, bearer-token guarding, logout, and the dashboard role
//! redirect.

use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use rocket::{Build, Rocket};
use serde_json::json;
use std::sync::Arc;
use stockroom_application::{AuthService, ProductService};
use stockroom_infrastructure::{FileSessionStore, InMemoryProductRepository};
use stockroom_server::init::AppState;
use stockroom_server::routes::stockroom_rocket;
use tempfile::TempDir;

async fn test_rocket(dir: &TempDir) -> Rocket<Build> {
    let session = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
    session.restore().await;
    let repository = Arc::new(InMemoryProductRepository::with_seed_data());
    stockroom_rocket(AppState {
        auth: Arc::new(AuthService::with_default_seed()),
        session,
        products: Arc::new(ProductService::new(repository)),
    })
}

async fn login(client: &Client, email: &str) -> String {
    let response = client
        .post("/api/auth/login")
        .header(ContentType::JSON)
        .body(json!({"email": email, "password": "password"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    body["token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

#[rocket::async_test]
async fn manager_login_end_to_end() {
    let dir = TempDir::new().unwrap();
    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();

    let response = client
        .post("/api/auth/login")
        .header(ContentType::JSON)
        .body(json!({"email": "manager@stockroom.dev", "password": "password"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["email"], "manager@stockroom.dev");
    assert_eq!(body["role"], "Manager");
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    // The issued token authenticates follow-up requests
    let response = client.get("/api/auth/me").header(bearer(token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let me: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(me["role"], "Manager");

    // Manager reaches the dashboard directly
    let response = client.get("/dashboard").header(bearer(token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let summary: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(summary["productCount"], 6);
}

#[rocket::async_test]
async fn invalid_credentials_get_one_generic_message() {
    let dir = TempDir::new().unwrap();
    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();

    for payload in [
        json!({"email": "manager@stockroom.dev", "password": "wrong"}),
        json!({"email": "nobody@stockroom.dev", "password": "password"}),
        json!({"email": "", "password": ""}),
    ] {
        let response = client
            .post("/api/auth/login")
            .header(ContentType::JSON)
            .body(payload.to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[rocket::async_test]
async fn store_keeper_dashboard_redirects_to_products() {
    let dir = TempDir::new().unwrap();
    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();
    let token = login(&client, "storekeeper@stockroom.dev").await;

    let response = client.get("/dashboard").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/products"));

    // The redirect target is readable by the same role
    let response = client.get("/products").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn requests_without_a_valid_token_are_rejected() {
    let dir = TempDir::new().unwrap();
    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();

    // No session open yet
    let response = client.get("/products").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let _token = login(&client, "manager@stockroom.dev").await;

    // Garbage token does not match the session
    let response = client
        .get("/products")
        .header(bearer("tok-garbage"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);

    // Missing Bearer prefix
    let response = client
        .get("/products")
        .header(Header::new("Authorization", "tok-garbage"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn logout_closes_the_session() {
    let dir = TempDir::new().unwrap();
    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();
    let token = login(&client, "manager@stockroom.dev").await;

    let response = client
        .post("/api/auth/logout")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    // The old token is no longer valid
    let response = client.get("/api/auth/me").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn session_survives_a_rebuilt_rocket_instance() {
    let dir = TempDir::new().unwrap();

    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();
    let token = login(&client, "manager@stockroom.dev").await;
    drop(client);

    // Same session path, fresh process state: restore picks the token up
    let client = Client::tracked(test_rocket(&dir).await).await.unwrap();
    let response = client.get("/api/auth/me").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let me: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(me["email"], "manager@stockroom.dev");
}
