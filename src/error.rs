// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Dataset(DatasetError),
}

/// Specific error types for timeline dataset problems.
/// Used to provide user-friendly, localized error messages at startup.
#[derive(Debug, Clone)]
pub enum DatasetError {
    /// The dataset contains no timelines at all.
    Empty,

    /// A timeline's start year is after its end year.
    YearOrder { title: String },

    /// The dataset file could not be parsed as TOML.
    Parse(String),

    /// I/O error while reading a dataset file (not found, permissions, ...).
    Io(String),
}

impl DatasetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DatasetError::Empty => "error-dataset-empty",
            DatasetError::YearOrder { .. } => "error-dataset-year-order",
            DatasetError::Parse(_) => "error-dataset-parse",
            DatasetError::Io(_) => "error-dataset-io",
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "dataset contains no timelines"),
            DatasetError::YearOrder { title } => {
                write!(f, "timeline '{title}' has start year after end year")
            }
            DatasetError::Parse(msg) => write!(f, "dataset parse error: {msg}"),
            DatasetError::Io(msg) => write!(f, "dataset I/O error: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O Error: {msg}"),
            Error::Config(msg) => write!(f, "Config Error: {msg}"),
            Error::Dataset(err) => write!(f, "Dataset Error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<DatasetError> for Error {
    fn from(err: DatasetError) -> Self {
        Error::Dataset(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
