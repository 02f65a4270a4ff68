//! Candidate sources
//!
//! The matcher never fetches anything itself. Callers hand it a snapshot
//! taken from one of these sources right before each query.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies a finite in-memory list of records on demand
pub trait CandidateSource<T> {
    fn snapshot(&self) -> Result<Vec<T>, AppError>;
}

/// Records already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    records: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Clone> CandidateSource<T> for StaticSource<T> {
    fn snapshot(&self) -> Result<Vec<T>, AppError> {
        Ok(self.records.clone())
    }
}

/// A JSON array of records exported from the record store
#[derive(Debug, Clone)]
pub struct JsonFileSource<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: DeserializeOwned> CandidateSource<T> for JsonFileSource<T> {
    fn snapshot(&self) -> Result<Vec<T>, AppError> {
        let data = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("record file {}", self.path.display()))
            }
            _ => AppError::from(err),
        })?;

        let records: Vec<T> = serde_json::from_str(&data).map_err(|err| {
            AppError::ParseError(format!("{}: {}", self.path.display(), err))
        })?;

        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
