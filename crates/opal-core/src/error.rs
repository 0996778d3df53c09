use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}
