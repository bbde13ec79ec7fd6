use super::{Backend, BackendError};
use crate::protocol::{ChatRequest, ModelDescriptor, ModelStatus};

const MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "gpt-4o-mini",
        name: "GPT-4o Mini",
        provider: "OpenAI",
        status: ModelStatus::Available,
    },
    ModelDescriptor {
        id: "claude-3-haiku",
        name: "Claude 3 Haiku",
        provider: "Anthropic",
        status: ModelStatus::Available,
    },
];

/// Placeholder backend: static model list and a canned echo reply.
/// Stands in until a real provider integration exists.
#[derive(Debug, Default)]
pub struct Placeholder;

impl Placeholder {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for Placeholder {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn models(&self) -> &[ModelDescriptor] {
        MODELS
    }

    fn reply(&self, request: &ChatRequest) -> Result<String, BackendError> {
        // Unknown model ids are echoed back as-is; only a listed model that is
        // marked unavailable is refused.
        let unavailable = MODELS
            .iter()
            .any(|m| m.id == request.model && m.status == ModelStatus::Unavailable);
        if unavailable {
            return Err(BackendError::ModelUnavailable(request.model.clone()));
        }

        Ok(format!(
            "This is a placeholder response from the backend. You said: \"{}\"",
            request.message
        ))
    }
}
