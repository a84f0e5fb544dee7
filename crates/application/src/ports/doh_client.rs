use async_trait::async_trait;
use doh_lookup_domain::{AnswerSet, DomainError, DomainQuery, RecordType};

/// Issues one DoH query and decodes the body according to its content type.
#[async_trait]
pub trait DohClient: Send + Sync {
    async fn query(
        &self,
        domain: &DomainQuery,
        record_type: RecordType,
    ) -> Result<AnswerSet, DomainError>;
}
