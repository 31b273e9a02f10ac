use std::collections::HashMap;
use std::str::FromStr;

use csv::{StringRecord, StringRecordsIter};

use crate::models::errors::RowError;
use crate::types::{LineNumber, Quantity};

/// Column names of the exchange history export.
pub mod columns {
    pub const DATE: &str = "Date";
    pub const TIME: &str = "Time";
    pub const TYPE: &str = "Type";
    pub const CURRENCY: &str = "Currency";
    pub const AMOUNT: &str = "Amount";
    pub const FEE_AMOUNT: &str = "Fee amount";
    pub const FEE_CURRENCY: &str = "Fee currency";
    /// Both spellings of the fiat side of a trade seen across export versions, in lookup order.
    pub const PAID_AMOUNT: [&str; 2] = ["EUR received / paid", "Received / Paid Amount"];
}

/// A single data row of the history export, keyed by header name.
///
/// Nothing is validated up front: columns are looked up lazily by the
/// transformer, so a row only fails on the columns its transaction type uses.
#[derive(Debug, Clone, Default)]
pub struct HistoryRecord {
    line: LineNumber,
    fields: HashMap<String, String>
}

impl HistoryRecord {
    pub fn new(line: LineNumber, fields: HashMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Pairs a raw CSV record with the file headers. Surplus values on long
    /// rows are dropped, columns past the end of short rows are left absent.
    pub fn from_csv(line: LineNumber, headers: &StringRecord, record: &StringRecord) -> Self {
        let fields = headers.iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        Self::new(line, fields)
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    pub fn field(&self, column: &str) -> Result<&str, RowError> {
        self.fields.get(column)
            .map(String::as_str)
            .ok_or_else(|| RowError::missing_column(self.line, column))
    }

    /// Like [`HistoryRecord::field`], but a blank cell counts as a missing column.
    pub fn non_empty_field(&self, column: &str) -> Result<&str, RowError> {
        let value = self.field(column)?;

        if value.trim().is_empty() {
            return Err(RowError::missing_column(self.line, column));
        }

        Ok(value)
    }

    /// Returns the first of `candidates` present on the row along with its value.
    pub fn first_field<'a>(&'a self, candidates: &[&'a str]) -> Result<(&'a str, &'a str), RowError> {
        candidates.iter()
            .find_map(|column| self.fields.get(*column).map(|value| (*column, value.as_str())))
            .ok_or_else(|| RowError::missing_column(self.line, candidates.join(" | ")))
    }

    pub fn quantity(&self, column: &str) -> Result<Quantity, RowError> {
        let value = self.field(column)?;
        parse_quantity(self.line, column, value)
    }

    pub fn first_quantity(&self, candidates: &[&str]) -> Result<Quantity, RowError> {
        let (column, value) = self.first_field(candidates)?;
        parse_quantity(self.line, column, value)
    }
}

fn parse_quantity(line: LineNumber, column: &str, value: &str) -> Result<Quantity, RowError> {
    Quantity::from_str(value).map_err(|error| RowError::invalid_amount(line, column, value, error))
}

/// Adapts a CSV records iterator into history records, tagging each with the
/// line it was read from. Records the CSV layer cannot decode are surfaced as
/// [`RowError::Malformed`] so the caller can skip them and keep going.
pub struct HistoryRecords<'r, R: std::io::Read> {
    headers: StringRecord,
    records: StringRecordsIter<'r, R>,
    read: LineNumber
}

impl<'r, R: std::io::Read> HistoryRecords<'r, R> {
    pub fn new(headers: StringRecord, records: StringRecordsIter<'r, R>) -> Self {
        Self { headers, records, read: 0 }
    }
}

impl<R: std::io::Read> Iterator for HistoryRecords<'_, R> {
    type Item = Result<HistoryRecord, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.read += 1;

        // Header occupies line 1; fall back to the record count when the
        // reader cannot report a position.
        let fallback_line = self.read + 1;

        Some(match result {
            Ok(record) => {
                let line = record.position().map_or(fallback_line, |position| position.line());
                Ok(HistoryRecord::from_csv(line, &self.headers, &record))
            }
            Err(error) => {
                let line = error.position().map_or(fallback_line, |position| position.line());
                Err(RowError::malformed(line, error))
            }
        })
    }
}
