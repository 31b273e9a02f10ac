use crate::models::errors::RowError;
use crate::models::history_record::columns;
use crate::models::{HistoryRecord, Leg, NormalizedRecord, TransactionType};

/// Fiat side of every buy and sell. The export carries no quote currency
/// column, so trades are assumed to be settled in euro.
pub const QUOTE_CURRENCY: &str = "EUR";

/// Maps one history row onto the normalized received/sent/fee layout.
///
/// The row is classified by its `Type` column first; only the columns that
/// type needs are then read. Any missing column, unparsable amount or
/// unknown type yields a [`RowError`] and nothing is emitted for the row.
///
/// | type       | received           | sent               | fee          |
/// |------------|--------------------|--------------------|--------------|
/// | deposit    | amount, currency   |                    |              |
/// | withdrawal |                    | amount, currency   | fee          |
/// | buy        | amount, currency   | paid amount, EUR   | fee          |
/// | sell       | paid amount, EUR   | amount, currency   | fee          |
pub fn transform(record: &HistoryRecord) -> Result<NormalizedRecord, RowError> {
    let transaction_type = TransactionType::from(record.field(columns::TYPE)?);

    let (received, sent, fee) = match transaction_type {
        TransactionType::Deposit => (Some(asset_leg(record)?), None, None),
        TransactionType::Withdrawal => (None, Some(asset_leg(record)?), Some(fee_leg(record)?)),
        TransactionType::Buy => (Some(asset_leg(record)?), Some(quote_leg(record)?), Some(fee_leg(record)?)),
        TransactionType::Sell => (Some(quote_leg(record)?), Some(asset_leg(record)?), Some(fee_leg(record)?)),
        TransactionType::Unknown(kind) => return Err(RowError::unknown_type(record.line(), &kind))
    };

    Ok(NormalizedRecord {
        date: timestamp(record)?,
        received,
        sent,
        fee,
        tag: String::new()
    })
}

fn timestamp(record: &HistoryRecord) -> Result<String, RowError> {
    let date = record.field(columns::DATE)?;
    let time = record.field(columns::TIME)?;
    let whole_seconds = time.split_once('.').map_or(time, |(whole, _)| whole);

    Ok(format!("{date} {whole_seconds}"))
}

fn asset_leg(record: &HistoryRecord) -> Result<Leg, RowError> {
    let quantity = record.quantity(columns::AMOUNT)?;
    Ok(Leg::new(quantity, record.non_empty_field(columns::CURRENCY)?))
}

fn quote_leg(record: &HistoryRecord) -> Result<Leg, RowError> {
    let quantity = record.first_quantity(&columns::PAID_AMOUNT)?;
    Ok(Leg::new(quantity, QUOTE_CURRENCY))
}

fn fee_leg(record: &HistoryRecord) -> Result<Leg, RowError> {
    let quantity = record.quantity(columns::FEE_AMOUNT)?;
    Ok(Leg::new(quantity, record.non_empty_field(columns::FEE_CURRENCY)?))
}
