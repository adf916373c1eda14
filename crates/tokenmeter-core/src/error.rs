use crate::models::ModelId;

/// Errors from strict estimation
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("model not found: {0}")]
    UnknownModel(ModelId),
}
