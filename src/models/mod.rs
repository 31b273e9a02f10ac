mod errors;
mod history_record;
mod normalized_record;
mod transformer;

pub use history_record::{HistoryRecord, HistoryRecords};
pub use normalized_record::{Leg, NormalizedRecord};
pub use transformer::transform;

/// Kind of a history row, matched case-insensitively on the `Type` column.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Buy,
    Sell,
    Unknown(String)
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "deposit" => TransactionType::Deposit,
            "withdrawal" => TransactionType::Withdrawal,
            "buy" => TransactionType::Buy,
            "sell" => TransactionType::Sell,
            _ => TransactionType::Unknown(value.to_string())
        }
    }
}
