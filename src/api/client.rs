use std::time::Duration;

use reqwest::{Client, Method, Response, Url};

use crate::config::ApiConfig;
use crate::sensor::{NewSensor, Sensor, SensorId};

use super::error::ApiError;

const COLLECTION_PATH: [&str; 2] = ["api", "sensores"];

/// Typed client for the sensor endpoints.
///
/// Only connection establishment is bounded (`connect_timeout_seconds`);
/// an established request is never timed out or cancelled.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET /api/sensores`
    pub async fn list(&self) -> Result<Vec<Sensor>, ApiError> {
        let url = self.endpoint(None);
        let response = self.send(Method::GET, url.clone(), None).await?;
        let body = response.bytes().await.map_err(|source| ApiError::Connection {
            url: url.to_string(),
            source,
        })?;
        let sensors: Vec<Sensor> = serde_json::from_slice(&body)?;
        tracing::debug!(count = sensors.len(), "Sensor list received");
        Ok(sensors)
    }

    /// `POST /api/sensores`. The response body is ignored.
    pub async fn create(&self, sensor: &NewSensor) -> Result<(), ApiError> {
        self.send(Method::POST, self.endpoint(None), Some(sensor))
            .await
            .map(drop)
    }

    /// `DELETE /api/sensores/{id}`. The response body is ignored.
    pub async fn delete(&self, id: &SensorId) -> Result<(), ApiError> {
        self.send(Method::DELETE, self.endpoint(Some(id)), None)
            .await
            .map(drop)
    }

    fn endpoint(&self, id: Option<&SensorId>) -> Url {
        let mut url = self.base.clone();
        // `new` rejected cannot-be-a-base URLs, so the segments are writable.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(COLLECTION_PATH);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&NewSensor>,
    ) -> Result<Response, ApiError> {
        let method_name = method_name(&method);
        tracing::debug!(method = method_name, url = %url, "Sending request");

        let mut builder = self.client.request(method, url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| ApiError::Connection {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: method_name,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

fn method_name(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "DELETE" => "DELETE",
        _ => "OTHER",
    }
}
