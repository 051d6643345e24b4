use crate::interfaces::http_api::get_ureq_agent;

use super::{
    AccountConfig, ActivationError, ActivationProgress, ActivationRequest, ActivationResult,
    Credentials,
};

/// Activates this installation against the account service, using a team key
/// or username/password (plus optional 2FA code). Empty strings mean "not
/// provided"; a team key takes precedence over username and password.
///
/// Blocks on a single request, without retry.
pub fn activate(
    config: &dyn AccountConfig,
    progress: &dyn ActivationProgress,
    team_key: &str,
    username: &str,
    password: &str,
    two_factor_code: &str,
) -> Result<ActivationResult, ActivationError> {
    let agent = get_ureq_agent();
    activate_with_agent(
        &agent,
        config,
        progress,
        team_key,
        username,
        password,
        two_factor_code,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn activate_with_agent(
    agent: &ureq::Agent,
    config: &dyn AccountConfig,
    progress: &dyn ActivationProgress,
    team_key: &str,
    username: &str,
    password: &str,
    two_factor_code: &str,
) -> Result<ActivationResult, ActivationError> {
    log::debug!("[activate]");
    let mut request = ActivationRequest::new(config)?;
    progress.register_activation_request(&request);

    match Credentials::select(team_key, username, password, two_factor_code) {
        Some(credentials) => {
            log::debug!("Activating with {}", credentials.kind());
            request.add_credentials(&credentials);
        }
        None => log::debug!("No credentials provided; sending activation request without"),
    }

    let body = request.perform(agent)?;
    let result = ActivationResult::from_body(&body)?;
    log::debug!(
        "Activation response carried account key{}",
        if result.data_key.is_empty() { "" } else { " and data key" }
    );
    Ok(result)
}
