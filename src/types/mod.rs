mod errors;
mod quantity;
#[cfg(test)]
mod tests;

pub use errors::QuantityError;
pub use quantity::Quantity;

/// 1-based line in the source file, used to point diagnostics at a row.
pub type LineNumber = u64;
