use crate::engine::errors::ConverterError;
use crate::models::{transform, HistoryRecords, NormalizedRecord};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_INPUT_PATH: &str = "history.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "history_transformed.csv";

/// Row counts of a finished conversion. `emitted + skipped == read` always holds.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ConversionSummary {
    pub read: u64,
    pub emitted: u64,
    pub skipped: u64
}

/// Rewrites an exchange history export into the normalized layout.
pub struct Converter {
    input: PathBuf,
    output: PathBuf
}

impl Converter {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into()
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Converts the whole input file in one sequential pass.
    ///
    /// The input is opened before the output is created, so a missing input
    /// leaves no output file behind. Rows that fail to transform are logged
    /// and skipped; only file level failures abort the run.
    pub fn run(&self) -> Result<ConversionSummary, ConverterError> {
        let file = File::open(&self.input).map_err(|source| ConverterError::InputUnavailable {
            path: self.input.clone(),
            source
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()
            .map_err(|source| ConverterError::Header { path: self.input.clone(), source })?
            .clone();

        let file = File::create(&self.output).map_err(|source| ConverterError::OutputUnavailable {
            path: self.output.clone(),
            source
        })?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(NormalizedRecord::HEADER).map_err(|source| self.write_error(source))?;

        let mut summary = ConversionSummary::default();

        for result in HistoryRecords::new(headers, reader.records()) {
            summary.read += 1;

            match result.and_then(|record| transform(&record).map(|normalized| (record.line(), normalized))) {
                Ok((line, normalized)) => {
                    writer.serialize(&normalized).map_err(|source| self.write_error(source))?;
                    summary.emitted += 1;
                    debug!("Row [{line}] converted");
                }
                Err(error) => {
                    summary.skipped += 1;
                    warn!("{error}");
                }
            }
        }

        writer.flush().map_err(|source| ConverterError::Flush {
            path: self.output.clone(),
            source
        })?;

        info!(
            "Converted [{}] into [{}]: {} read, {} emitted, {} skipped",
            self.input.display(),
            self.output.display(),
            summary.read,
            summary.emitted,
            summary.skipped
        );

        Ok(summary)
    }

    fn write_error(&self, source: csv::Error) -> ConverterError {
        ConverterError::Write {
            path: self.output.clone(),
            source
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
