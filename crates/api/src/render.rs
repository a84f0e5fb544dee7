//! HTML rendering of lookup results.
//!
//! Each row builder is a pure function of one record type's answers; the
//! page template concatenates them in [`RecordType::ALL`] order, so the same
//! input always yields the same bytes.

use askama::Template;
use doh_lookup_domain::{AggregateResult, DohAnswer, DomainQuery, RecordType};
use serde_json::Value;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// Full page. `domain` is sanitized text already, so it is marked safe;
/// row markup comes pre-rendered from [`RecordRowView`].
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>DNS Records for {{ domain|safe }}</title>
</head>
<body>
  <h1>DNS Records for {{ domain|safe }}</h1>
  <table>
    <tr><th>Type</th><th>Records</th></tr>
{% for row in rows %}    {{ row|safe }}
{% endfor %}  </table>
</body>
</html>"#,
    ext = "html"
)]
pub struct LookupPageView<'a> {
    pub domain: &'a str,
    pub rows: Vec<String>,
}

/// One table row; every fragment is auto-escaped.
#[derive(Template)]
#[template(
    source = "<tr><td>{{ label }}</td><td>{% for fragment in fragments %}<p>{{ fragment }}</p>{% endfor %}</td></tr>",
    ext = "html"
)]
pub struct RecordRowView {
    pub label: &'static str,
    pub fragments: Vec<String>,
}

impl RecordRowView {
    /// `None` when the answers for `record_type` fail validation.
    pub fn build(record_type: RecordType, result: &AggregateResult) -> Option<Self> {
        let records = result.valid_answers(record_type)?;
        Some(Self {
            label: record_type.as_str(),
            fragments: records.iter().map(fragment_text).collect(),
        })
    }
}

pub fn render_page(domain: &DomainQuery, result: &AggregateResult) -> Result<String, askama::Error> {
    let rows = RecordType::ALL
        .iter()
        .filter_map(|rt| RecordRowView::build(*rt, result))
        .map(|row| row.render())
        .collect::<Result<Vec<_>, _>>()?;

    LookupPageView {
        domain: domain.as_str(),
        rows,
    }
    .render()
}

fn fragment_text(answer: &DohAnswer) -> String {
    match &answer.data {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
