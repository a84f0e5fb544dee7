use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use doh_lookup_domain::DomainQuery;
use tracing::{error, info, instrument};

use crate::render::{render_page, HTML_CONTENT_TYPE};
use crate::state::AppState;

/// Reads the segment straight from the request URI, still percent-encoded.
/// Path extractors would decode it first: a second decode would follow, and
/// invalid UTF-8 would be rejected with a 400.
#[instrument(skip_all)]
pub async fn lookup_domain(State(state): State<AppState>, uri: Uri) -> Response {
    let raw = uri.path().strip_prefix('/').unwrap_or_default();

    let domain = DomainQuery::from_path_segment(raw);
    let result = state.lookup.execute(&domain).await;

    info!(
        domain = %domain,
        resolved_types = result.resolved_count(),
        "Lookup rendered"
    );

    match render_page(&domain, &result) {
        Ok(html) => ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], html).into_response(),
        Err(e) => {
            error!(domain = %domain, error = %e, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering error").into_response()
        }
    }
}
