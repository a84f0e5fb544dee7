pub mod https;

use doh_lookup_domain::{AnswerSet, DohResponse, DomainError, DNS_JSON_CONTENT_TYPE};

/// Decodes a DoH body by its declared content type: JSON for
/// `application/dns-json`, opaque text for anything else.
pub fn decode_body(content_type: &str, body: &[u8]) -> Result<AnswerSet, DomainError> {
    if content_type.contains(DNS_JSON_CONTENT_TYPE) {
        let response: DohResponse = serde_json::from_slice(body)
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))?;
        Ok(response.into())
    } else {
        Ok(AnswerSet::Opaque(String::from_utf8_lossy(body).into_owned()))
    }
}
