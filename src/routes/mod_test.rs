use super::*;
use reqwest::StatusCode;
use reqwest::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};

async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app()).await.expect("test server");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn welcome_returns_literal() {
    assert_eq!(greeter::welcome().await, "Bienvenido a MeliVote API");
}

#[tokio::test]
async fn get_root_returns_greeting() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), greeter::WELCOME_MESSAGE);
}

#[tokio::test]
async fn get_root_ignores_query_and_headers() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base}/?board=42&debug=true"))
        .header("x-client", "preview")
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), greeter::WELCOME_MESSAGE);
}

#[tokio::test]
async fn cross_origin_request_is_allowed() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base}/"))
        .header(ORIGIN, "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/api/board")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
