mod aggregate;
mod answer;
mod record_type;

pub use aggregate::AggregateResult;
pub use answer::{AnswerSet, DohAnswer, DohQuestion, DohResponse};
pub use record_type::RecordType;
