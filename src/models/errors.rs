use crate::types::{LineNumber, QuantityError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row [{line}] skipped: missing column [{column}]")]
    MissingColumn {
        line: LineNumber,
        column: String
    },
    #[error("Row [{line}] skipped: column [{column}] has malformed amount '{value}'")]
    InvalidAmount {
        line: LineNumber,
        column: String,
        value: String,
        source: QuantityError
    },
    #[error("Row [{line}] skipped: unknown transaction type '{kind}'")]
    UnknownType {
        line: LineNumber,
        kind: String
    },
    #[error("Row [{line}] skipped: unreadable record ({reason})")]
    Malformed {
        line: LineNumber,
        reason: String
    }
}

impl RowError {
    pub fn missing_column(line: LineNumber, column: impl Into<String>) -> Self {
        Self::MissingColumn { line, column: column.into() }
    }

    pub fn invalid_amount(line: LineNumber, column: &str, value: &str, source: QuantityError) -> Self {
        Self::InvalidAmount {
            line,
            column: column.to_string(),
            value: value.to_string(),
            source
        }
    }

    pub fn unknown_type(line: LineNumber, kind: &str) -> Self {
        Self::UnknownType { line, kind: kind.to_string() }
    }

    pub fn malformed(line: LineNumber, reason: impl ToString) -> Self {
        Self::Malformed { line, reason: reason.to_string() }
    }
}
