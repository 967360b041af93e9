//! Integration tests for the liveness prober against a real HTTP backend

use labkit::adapters::api::ApiClient;
use labkit::config::{ApiConfig, LivenessConfig};
use labkit::core::liveness::{Liveness, LivenessProber};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

#[tokio::test]
async fn test_probe_online_backend() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/ping")
        .with_body(r#"{"code": 200, "response_data": "pong"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&ApiConfig {
        base_url: format!("{}/api/", server.url()),
    })
    .unwrap();
    let prober = LivenessProber::new(Arc::new(client), &LivenessConfig::default());

    assert_eq!(prober.probe().await, Liveness::Online);
}

#[tokio::test]
async fn test_probe_backend_reporting_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/ping")
        .with_body(r#"{"code": 500, "error_message": "database down"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&ApiConfig {
        base_url: format!("{}/api/", server.url()),
    })
    .unwrap();
    let prober = LivenessProber::new(Arc::new(client), &LivenessConfig::default());

    assert_eq!(prober.probe().await, Liveness::Offline);
}

#[tokio::test]
async fn test_spawned_prober_pings_every_tick() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/ping")
        .with_body(r#"{"code": 200}"#)
        .expect_at_least(3)
        .create_async()
        .await;

    let client = ApiClient::new(&ApiConfig {
        base_url: format!("{}/api/", server.url()),
    })
    .unwrap();
    let prober = LivenessProber::new(Arc::new(client), &LivenessConfig::default())
        .with_interval(Duration::from_millis(20));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = prober.spawn(shutdown_rx, move |liveness| {
        let _ = tx.send(liveness);
    });

    for _ in 0..3 {
        let liveness = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(liveness, Liveness::Online);
    }

    shutdown_tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
    mock.assert_async().await;
}
