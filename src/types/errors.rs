use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuantityError {
    #[error("Quantity error: {0}")]
    InvalidFormat(String)
}
