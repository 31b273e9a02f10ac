mod converter;
mod errors;

pub use converter::{Converter, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
