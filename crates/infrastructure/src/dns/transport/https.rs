//! DoH JSON transport
//!
//! Sends each query as a GET with the domain and record type in the query
//! string, asking for the JSON encoding:
//! ```text
//! GET /dns-query?name=example.com&type=AAAA HTTP/1.1
//! Accept: application/dns-json
//! ```

use super::decode_body;
use async_trait::async_trait;
use doh_lookup_application::ports::DohClient;
use doh_lookup_domain::{AnswerSet, DomainError, DomainQuery, RecordType, UpstreamConfig};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

/// DoH client for resolvers speaking the `application/dns-json` dialect.
pub struct HttpsJsonClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpsJsonClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl DohClient for HttpsJsonClient {
    async fn query(
        &self,
        domain: &DomainQuery,
        record_type: RecordType,
    ) -> Result<AnswerSet, DomainError> {
        let url = &self.config.endpoint;

        debug!(
            url = %url,
            domain = %domain,
            record_type = %record_type,
            "Sending DoH query"
        );

        let response = self
            .client
            .get(url)
            .query(&[("name", domain.as_str()), ("type", record_type.as_str())])
            .header(ACCEPT, &self.config.accept)
            .send()
            .await
            .map_err(|e| DomainError::UpstreamRequest {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::UpstreamRequest {
                url: url.clone(),
                reason: format!("Failed to read DoH response: {}", e),
            })?;

        debug!(
            url = %url,
            record_type = %record_type,
            content_type = %content_type,
            response_len = body.len(),
            "DoH response received"
        );

        decode_body(&content_type, &body)
    }
}
