use crate::ports::DohClient;
use doh_lookup_domain::{AggregateResult, AnswerSet, DomainQuery, RecordType};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans out one query per [`RecordType`] and joins the answers.
pub struct LookupDomainUseCase {
    client: Arc<dyn DohClient>,
}

impl LookupDomainUseCase {
    pub fn new(client: Arc<dyn DohClient>) -> Self {
        Self { client }
    }

    /// Never fails: a type whose query errors ends up [`AnswerSet::Absent`].
    pub async fn execute(&self, domain: &DomainQuery) -> AggregateResult {
        let queries = RecordType::ALL.map(|record_type| self.query_one(domain, record_type));
        let answers: Vec<AnswerSet> = join_all(queries).await;

        let mut result = AggregateResult::new();
        for (record_type, answer) in RecordType::ALL.into_iter().zip(answers) {
            result.set(record_type, answer);
        }

        debug!(
            domain = %domain,
            resolved = result.resolved_count(),
            "Lookup complete"
        );

        result
    }

    async fn query_one(&self, domain: &DomainQuery, record_type: RecordType) -> AnswerSet {
        match self.client.query(domain, record_type).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(
                    domain = %domain,
                    record_type = %record_type,
                    error = %e,
                    "DoH query failed, treating as no answer"
                );
                AnswerSet::Absent
            }
        }
    }
}
