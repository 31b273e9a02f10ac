use serde::{Serialize, Serializer};

use crate::types::Quantity;

/// One side of a normalized transaction: how much of which currency.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Leg {
    pub quantity: Quantity,
    pub currency: String
}

impl Leg {
    pub fn new(quantity: Quantity, currency: impl Into<String>) -> Self {
        Self { quantity, currency: currency.into() }
    }
}

/// A transaction in the normalized received/sent/fee layout.
///
/// Each leg is either fully present or fully absent, so a quantity can never
/// be written without its currency or the other way around.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NormalizedRecord {
    /// `Date` and `Time` of the source row joined by a space, sub-seconds dropped.
    pub date: String,
    pub received: Option<Leg>,
    pub sent: Option<Leg>,
    pub fee: Option<Leg>,
    /// Left empty for manual categorization downstream.
    pub tag: String
}

impl NormalizedRecord {
    pub const HEADER: [&'static str; 8] = [
        "Date",
        "Received Quantity",
        "Received Currency",
        "Sent Quantity",
        "Sent Currency",
        "Fee Amount",
        "Fee Currency",
        "Tag"
    ];
}

#[derive(Serialize)]
struct NormalizedRow<'a> {
    date: &'a str,
    received_quantity: Option<Quantity>,
    received_currency: Option<&'a str>,
    sent_quantity: Option<Quantity>,
    sent_currency: Option<&'a str>,
    fee_amount: Option<Quantity>,
    fee_currency: Option<&'a str>,
    tag: &'a str
}

impl Serialize for NormalizedRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        NormalizedRow {
            date: &self.date,
            received_quantity: quantity(&self.received),
            received_currency: currency(&self.received),
            sent_quantity: quantity(&self.sent),
            sent_currency: currency(&self.sent),
            fee_amount: quantity(&self.fee),
            fee_currency: currency(&self.fee),
            tag: &self.tag
        }.serialize(serializer)
    }
}

fn quantity(leg: &Option<Leg>) -> Option<Quantity> {
    leg.as_ref().map(|leg| leg.quantity)
}

fn currency(leg: &Option<Leg>) -> Option<&str> {
    leg.as_ref().map(|leg| leg.currency.as_str())
}
