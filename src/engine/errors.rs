use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("Could not open input file [{}]: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not create output file [{}]: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not read header of input file [{}]: {source}", .path.display())]
    Header {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Could not write to output file [{}]: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Could not flush output file [{}]: {source}", .path.display())]
    Flush {
        path: PathBuf,
        source: io::Error
    }
}
