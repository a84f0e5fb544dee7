use percent_encoding::percent_decode_str;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Domain text taken from a request path, safe to drop into an HTML text
/// node and into the upstream query string.
///
/// No domain-syntax validation happens here: invalid names are forwarded and
/// the resolver rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainQuery {
    domain: Arc<str>,
}

impl DomainQuery {
    /// Percent-decodes `raw` and strips all markup from the result.
    pub fn from_path_segment(raw: &str) -> Self {
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        Self {
            domain: sanitize_markup(&decoded).into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.domain
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

impl fmt::Display for DomainQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain)
    }
}

/// Removes every tag from `input`. `<script>` and `<style>` lose their
/// content as well; other tags keep their inner text. Stray `<`, `>` and `&`
/// come back entity-escaped, so the output is stable under repeated calls.
pub fn sanitize_markup(input: &str) -> String {
    ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(input)
        .to_string()
}
