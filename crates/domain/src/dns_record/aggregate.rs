use super::{AnswerSet, DohAnswer, RecordType};

/// One [`AnswerSet`] per [`RecordType`], indexed by [`RecordType::index`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    answers: [AnswerSet; 7],
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, record_type: RecordType) -> &AnswerSet {
        &self.answers[record_type.index()]
    }

    pub fn set(&mut self, record_type: RecordType, answer: AnswerSet) {
        self.answers[record_type.index()] = answer;
    }

    pub fn with(mut self, record_type: RecordType, answer: AnswerSet) -> Self {
        self.set(record_type, answer);
        self
    }

    /// Records for `record_type` if the set is usable for rendering.
    ///
    /// Usable means non-empty with the first record carrying the numeric code
    /// of `record_type` itself. Resolvers sometimes answer 200 with a generic
    /// payload; those come back as `None`.
    pub fn valid_answers(&self, record_type: RecordType) -> Option<&[DohAnswer]> {
        let records = self.get(record_type).records();
        match records.first() {
            Some(first) if first.record_type == record_type.to_u16() => Some(records),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &AnswerSet)> {
        RecordType::ALL.into_iter().zip(self.answers.iter())
    }

    pub fn resolved_count(&self) -> usize {
        RecordType::ALL
            .iter()
            .filter(|rt| self.valid_answers(**rt).is_some())
            .count()
    }
}
