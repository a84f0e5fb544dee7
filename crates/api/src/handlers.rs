pub mod lookup;

pub use lookup::lookup_domain;

use axum::http::StatusCode;

pub const ROOT_PROMPT: &str = "Enter domain to lookup";
pub const NOT_FOUND_BODY: &str = "404, not found!";

pub async fn root_prompt() -> &'static str {
    ROOT_PROMPT
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
