use serde::{Deserialize, Serialize};

pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// The single DoH resolver every lookup is sent to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL; `name` and `type` are appended as query parameters.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value sent in the `accept` header.
    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            accept: default_accept(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://1.1.1.1/dns-query".to_string()
}

fn default_accept() -> String {
    DNS_JSON_CONTENT_TYPE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
