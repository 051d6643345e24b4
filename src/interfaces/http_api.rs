use ureq::tls::{TlsConfig, TlsProvider};

use crate::constants::defaults;

/// Blocking agent for calls to the account service. Status codes are left for
/// callers to interpret rather than turned into errors.
pub fn get_ureq_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(defaults::API_REQUEST_TIMEOUT))
        .http_status_as_error(false)
        .tls_config(
            TlsConfig::builder()
                .provider(TlsProvider::NativeTls)
                .build(),
        )
        .build();
    ureq::Agent::new_with_config(config)
}
