#![allow(dead_code)]

use async_trait::async_trait;
use doh_lookup_application::ports::DohClient;
use doh_lookup_domain::{AnswerSet, DohAnswer, DomainError, DomainQuery, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

type Key = (String, RecordType);

#[derive(Clone, Default)]
pub struct MockDohClient {
    responses: Arc<RwLock<HashMap<Key, AnswerSet>>>,
    errors: Arc<RwLock<HashMap<Key, DomainError>>>,
    delays: Arc<RwLock<HashMap<RecordType, Duration>>>,
    calls: Arc<std::sync::Mutex<Vec<Key>>>,
}

impl MockDohClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, record_type: RecordType, answer: AnswerSet) {
        self.responses
            .write()
            .await
            .insert((domain.to_string(), record_type), answer);
    }

    pub async fn set_records(&self, domain: &str, record_type: RecordType, data: &[&str]) {
        let records = data
            .iter()
            .map(|d| DohAnswer::new(record_type.to_u16(), *d))
            .collect();
        self.set_response(domain, record_type, AnswerSet::Records(records))
            .await;
    }

    pub async fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.errors
            .write()
            .await
            .insert((domain.to_string(), record_type), error);
    }

    pub async fn set_delay(&self, record_type: RecordType, delay: Duration) {
        self.delays.write().await.insert(record_type, delay);
    }

    pub fn calls(&self) -> Vec<Key> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohClient for MockDohClient {
    async fn query(
        &self,
        domain: &DomainQuery,
        record_type: RecordType,
    ) -> Result<AnswerSet, DomainError> {
        let key = (domain.as_str().to_string(), record_type);
        self.calls.lock().unwrap().push(key.clone());

        let delay = self.delays.read().await.get(&record_type).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.errors.read().await.get(&key) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
