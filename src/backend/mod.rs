pub mod placeholder;

pub use placeholder::Placeholder;

use thiserror::Error;

use crate::protocol::{ChatRequest, ModelDescriptor};

/// Errors a backend may report while producing a reply.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("model {0} is unavailable")]
    ModelUnavailable(String),
}

/// Backend trait for chat providers.
pub trait Backend: Send + Sync {
    /// Human-readable name for this backend.
    fn name(&self) -> &str;

    /// Models this backend advertises.
    fn models(&self) -> &[ModelDescriptor];

    /// Produce the reply text for a validated chat request.
    fn reply(&self, request: &ChatRequest) -> Result<String, BackendError>;
}
