// End-to-end tests over a real socket with the stock one second latency.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use pipeline_mock_api::{bind, serve, AppState, ServerConfig};
use reqwest::header;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tokio::sync::oneshot;

struct TestServer {
    addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            ..Default::default()
        };
        let listener = bind(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let shutdown_timeout = config.shutdown_timeout();
            serve(
                listener,
                AppState::from_config(&config),
                async move {
                    let _ = stopped.await;
                },
                shutdown_timeout,
            )
            .await
            .unwrap();
        });

        TestServer {
            addr,
            stop: Some(stop),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_nodes_endpoint_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let started = Instant::now();
    let response = client
        .get(server.url("/api/nodes"))
        .header(header::ORIGIN, "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let body: Value = response.json().await.unwrap();
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(
        body,
        json!([
            {"id": "data-source", "name": "Data Source"},
            {"id": "transformer", "name": "Transformer"},
            {"id": "model", "name": "Model"},
            {"id": "sink", "name": "Sink"}
        ])
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_requests_finish_together() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let url = server.url("/api/nodes");

    let started = Instant::now();
    let (a, b) = tokio::join!(client.get(&url).send(), client.get(&url).send());
    let (a, b) = (a.unwrap(), b.unwrap());
    let (body_a, body_b) = tokio::join!(a.bytes(), b.bytes());
    let elapsed = started.elapsed();

    assert_eq!(body_a.unwrap(), body_b.unwrap());
    assert!(elapsed >= Duration::from_secs(1));
    assert!(
        elapsed < Duration::from_millis(1900),
        "requests were serialized: {:?}",
        elapsed
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_preflight_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .request(Method::OPTIONS, server.url("/api/nodes"))
        .header(header::ORIGIN, "https://editor.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://editor.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/api/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await;
}
