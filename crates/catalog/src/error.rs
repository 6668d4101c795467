use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("plan error: {0}")]
    Plan(#[from] matidx_plan::PlanError),

    #[error("schema error: {0}")]
    Schema(#[from] matidx_plan::SchemaError),

    #[error("contract violation: {0}")]
    ContractViolation(String),
}
