//! End-to-end checks for the status server over a real socket.

use goated_ops::page::{PLATFORM_NAME, STATUS_PAGE};
use goated_ops::server::build_router;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router()).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn every_get_path_returns_the_status_page() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for path in ["/", "/anything", "/api/deeply/nested?verbose=1"] {
        let res = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(res.status(), 200, "GET {path}");
        assert_eq!(res.headers().get("content-type").unwrap(), "text/html");
        assert_eq!(res.text().await.unwrap(), STATUS_PAGE);
    }
}

#[tokio::test]
async fn body_names_the_platform() {
    let base = spawn_server().await;
    let body = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains(PLATFORM_NAME));
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let first = client
        .get(format!("{base}/status"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    let second = client
        .get(format!("{base}/completely/different"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn non_get_methods_get_the_router_default() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/"))
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);
}
