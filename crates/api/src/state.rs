use doh_lookup_application::use_cases::LookupDomainUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupDomainUseCase>,
}

impl AppState {
    pub fn new(lookup: Arc<LookupDomainUseCase>) -> Self {
        Self { lookup }
    }
}
