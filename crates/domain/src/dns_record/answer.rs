use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record from the `Answer` array of a DoH JSON response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DohAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    #[serde(default)]
    pub data: Value,
}

impl DohAnswer {
    pub fn new(record_type: u16, data: impl Into<Value>) -> Self {
        Self {
            name: None,
            record_type,
            ttl: None,
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DohQuestion {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,
}

/// `application/dns-json` response body. Every field is optional: resolvers
/// omit `Answer` entirely when there is nothing to return.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DohResponse {
    #[serde(rename = "Status", default)]
    pub status: Option<u16>,

    #[serde(rename = "TC", default)]
    pub truncated: Option<bool>,

    #[serde(rename = "RD", default)]
    pub recursion_desired: Option<bool>,

    #[serde(rename = "RA", default)]
    pub recursion_available: Option<bool>,

    #[serde(rename = "AD", default)]
    pub authenticated_data: Option<bool>,

    #[serde(rename = "CD", default)]
    pub checking_disabled: Option<bool>,

    #[serde(rename = "Question", default)]
    pub question: Vec<DohQuestion>,

    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

/// Decoded outcome of a single record-type query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnswerSet {
    Records(Vec<DohAnswer>),
    /// Body returned under a content type other than `application/dns-json`.
    Opaque(String),
    #[default]
    Absent,
}

impl AnswerSet {
    pub fn records(&self) -> &[DohAnswer] {
        match self {
            AnswerSet::Records(records) => records,
            _ => &[],
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AnswerSet::Absent)
    }
}

impl From<DohResponse> for AnswerSet {
    fn from(response: DohResponse) -> Self {
        match response.answer {
            Some(records) => AnswerSet::Records(records),
            None => AnswerSet::Absent,
        }
    }
}
