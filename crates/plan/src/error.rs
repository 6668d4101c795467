use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

/// Failures raised while re-parsing a serialized plan through an external
/// plan engine.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("no active plan-engine session available")]
    MissingContext,

    #[error("failed to deserialize raw plan: {0}")]
    Deserialization(String),
}

/// Failures raised by the structured-type schema codec.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("malformed schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema is not a struct type: {0}")]
    NotAStruct(String),
}
