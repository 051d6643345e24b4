use super::ActivationRequest;

/// Receives notice of activation requests before they are sent, so that a UI
/// can show them as pending.
pub trait ActivationProgress {
    fn register_activation_request(&self, request: &ActivationRequest);
}

pub struct LogProgress;

impl ActivationProgress for LogProgress {
    fn register_activation_request(&self, request: &ActivationRequest) {
        log::info!("Activating against {}", request.url());
    }
}

pub struct NoProgress;

impl ActivationProgress for NoProgress {
    fn register_activation_request(&self, _request: &ActivationRequest) {}
}
