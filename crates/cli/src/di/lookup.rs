use doh_lookup_application::use_cases::LookupDomainUseCase;
use doh_lookup_domain::Config;
use doh_lookup_infrastructure::dns::HttpsJsonClient;
use std::sync::Arc;
use tracing::info;

pub struct LookupServices {
    pub lookup: Arc<LookupDomainUseCase>,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(
            endpoint = %config.upstream.endpoint,
            accept = %config.upstream.accept,
            timeout_secs = config.upstream.timeout_secs,
            "Initializing DoH client"
        );

        let client = Arc::new(HttpsJsonClient::new(config.upstream.clone())?);
        let lookup = Arc::new(LookupDomainUseCase::new(client));

        Ok(Self { lookup })
    }
}
