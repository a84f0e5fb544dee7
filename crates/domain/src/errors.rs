use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("DoH request to {url} failed: {reason}")]
    UpstreamRequest { url: String, reason: String },

    #[error("DoH server {url} returned HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Invalid DNS response: {0}")]
    InvalidResponse(String),

    #[error("Failed to build DoH client: {0}")]
    ClientBuild(String),
}
