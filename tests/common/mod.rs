//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use sensorflow::api::ApiClient;
use sensorflow::config::{ApiConfig, LoadOrdering};
use sensorflow::sensor::{Sensor, SensorKind};
use sensorflow::store::Store;
use sensorflow::sync::SyncController;
use std::future::Future;
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL where nothing is listening.
pub fn unreachable_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn api_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
    };
    ApiClient::new(&config).expect("Failed to build API client")
}

pub fn controller(base_url: &str, ordering: LoadOrdering) -> SyncController {
    SyncController::new(api_client(base_url), Store::new(), ordering)
}

pub fn sensor(id: i64, nombre: &str, tipo: SensorKind, valor: f64) -> Sensor {
    Sensor {
        id: id.into(),
        nombre: nombre.to_string(),
        tipo,
        valor,
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Poll `check` until it holds or `timeout` elapses.
pub async fn wait_until<F, Fut>(timeout: Duration, mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
