use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::{
    http_client::{
        error::{Error, HttpClientErrorChecker},
        http_client::HttpClient,
        request::Request,
    },
    response_record::{
        headers::ResponseHeaders, response::ResponseRecord, status::version_to_string,
        transport_info::TransportInfo,
    },
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::from)?;

        Ok(Self::new(client))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT).unwrap_or_else(|err| {
            warn!("Falling back to a client without the default timeout: {}", err);
            Self::new(reqwest::Client::new())
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<ResponseRecord, Error> {
        info!("Recording {} {}", request.method, request.url);

        let started = Instant::now();

        let reqwest_response = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.header_map())
            .body(request.body)
            .send()
            .await
            .map_err(Error::from)?;

        let status = reqwest_response.status().as_u16();
        let http_version = version_to_string(reqwest_response.version());
        let headers: ResponseHeaders = reqwest_response.headers().into();

        let mut transport_info = TransportInfo::from([
            ("url", json!(reqwest_response.url().as_str())),
            ("http_version", json!(http_version)),
        ]);
        if let Some(remote_addr) = reqwest_response.remote_addr() {
            transport_info.insert("primary_ip".to_string(), json!(remote_addr.ip().to_string()));
            transport_info.insert("primary_port".to_string(), json!(remote_addr.port()));
        }

        let body = reqwest_response.bytes().await.map_err(Error::from)?;

        transport_info.insert("size_download".to_string(), json!(body.len()));
        transport_info.insert(
            "total_time".to_string(),
            Value::from(started.elapsed().as_secs_f64()),
        );

        debug!(
            "Recorded {} response with {} header(s) and {} body byte(s)",
            status,
            headers.len(),
            body.len()
        );

        Ok(ResponseRecord::new(status)
            .with_http_version(http_version)
            .with_headers(headers)
            .with_body(body)
            .with_transport_info(transport_info))
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn is_body(&self) -> bool {
        self.is_body() || self.is_decode()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::http_client::reqwest_http_client::ReqwestHttpClient;

    #[test]
    fn builds_a_client_with_an_explicit_timeout() {
        assert!(ReqwestHttpClient::with_timeout(Duration::from_millis(250)).is_ok());
    }
}
