use ureq::http::{HeaderName, HeaderValue};
use url::Url;

use super::{AccountConfig, ActivationError, Credentials};

pub const ACTIVATE_PATH: &str = "/activate";

/// A POST to the activation endpoint, with the account key header already
/// set. Form parameters are added by the caller.
#[derive(Debug, Clone)]
pub struct ActivationRequest {
    url: Url,
    headers: Vec<(String, String)>,
    params: Vec<(&'static str, String)>,
}

impl ActivationRequest {
    pub fn new(config: &dyn AccountConfig) -> Result<Self, ActivationError> {
        let base_url = config.api_base_url();
        let base = base_url.strip_suffix('/').unwrap_or(&base_url);
        let url = Url::parse(&format!("{base}{ACTIVATE_PATH}"))
            .map_err(|e| ActivationError::Config(format!("API base URL '{base_url}': {e}")))?;

        let mut request = ActivationRequest {
            url,
            headers: Vec::new(),
            params: Vec::new(),
        };
        request.add_header("Accept", "application/json");

        let (name, value) = (config.account_key_header(), config.account_key());
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ActivationError::Config(format!("account key header name '{name}': {e}")))?;
        HeaderValue::from_str(&value)
            .map_err(|e| ActivationError::Config(format!("account key header value: {e}")))?;
        request.add_header(name, value);
        Ok(request)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    pub fn add_param(&mut self, name: &'static str, value: impl Into<String>) {
        self.params.push((name, value.into()));
    }

    pub fn add_credentials(&mut self, credentials: &Credentials) {
        for (name, value) in credentials.params() {
            self.add_param(name, value);
        }
    }

    /// Sends the request once and returns the raw body of a 200 response.
    pub fn perform(&self, agent: &ureq::Agent) -> Result<Vec<u8>, ActivationError> {
        let mut builder = agent.post(self.url.as_str());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.send_form(
            self.params
                .iter()
                .map(|(name, value)| (*name, value.as_str())),
        )?;

        let status = response.status().as_u16();
        log::debug!("Activation response status: {status}");
        if status != 200 {
            let body = response.body_mut().read_to_vec().unwrap_or_default();
            return Err(ActivationError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(response.body_mut().read_to_vec()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account_mgmt::StaticConfig;

    #[test]
    fn url_is_base_plus_activate() {
        let request = ActivationRequest::new(&StaticConfig::new("https://host/api", "")).unwrap();
        assert_eq!(request.url().as_str(), "https://host/api/activate");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let request = ActivationRequest::new(&StaticConfig::new("https://host/api/", "")).unwrap();
        assert_eq!(request.url().as_str(), "https://host/api/activate");
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let res = ActivationRequest::new(&StaticConfig::new("not a url", "AK0"));
        assert!(matches!(res, Err(ActivationError::Config(_))));
    }

    #[test]
    fn invalid_account_key_header_is_config_error() {
        let mut config = StaticConfig::new("https://host", "AK0");
        for name in ["", "X Key", "X-Key\n"] {
            config.account_key_header = name.to_string();
            let res = ActivationRequest::new(&config);
            assert!(matches!(res, Err(ActivationError::Config(_))), "{name:?}");
        }

        let mut config = StaticConfig::new("https://host", "AK0\r\nX-Injected: 1");
        config.account_key_header = "X-Key".to_string();
        let res = ActivationRequest::new(&config);
        assert!(matches!(res, Err(ActivationError::Config(_))));
    }

    #[test]
    fn headers_carry_accept_and_account_key() {
        let mut config = StaticConfig::new("https://host", "AK0");
        config.account_key_header = "X-Custom-Key".to_string();
        let request = ActivationRequest::new(&config).unwrap();
        assert_eq!(
            request.headers(),
            &[
                ("Accept".to_string(), "application/json".to_string()),
                ("X-Custom-Key".to_string(), "AK0".to_string()),
            ]
        );
        assert!(request.params().is_empty());
    }
}
