//! `Host` backed by reqwest and the tokio timer.

use std::time::Duration;

use artic_core::{ApiError, Host, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone, Default)]
pub struct ReqwestHost {
    http: reqwest::Client,
}

impl ReqwestHost {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Host for ReqwestHost {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }

    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use artic_core::SIMULATED_DELAY;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pause_waits_at_least_the_duration() {
        let host = ReqwestHost::default();
        let start = Instant::now();
        host.pause(SIMULATED_DELAY).await;
        assert!(start.elapsed() >= Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://{addr}/artworks/1"),
            headers: Vec::new(),
        };
        let err = ReqwestHost::default().execute(request).await.unwrap_err();
        assert!(matches!(err, ApiError::TransportError(msg) if !msg.is_empty()));
    }
}
