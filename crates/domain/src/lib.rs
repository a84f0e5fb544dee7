//! doh-lookup Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_query;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, UpstreamConfig, DNS_JSON_CONTENT_TYPE};
pub use dns_record::{AggregateResult, AnswerSet, DohAnswer, DohQuestion, DohResponse, RecordType};
pub use domain_query::{sanitize_markup, DomainQuery};
pub use errors::DomainError;
