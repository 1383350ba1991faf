use crate::entities::LocationRecord;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationSourceError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Capability to enumerate the location records of a data-entry surface.
///
/// `list` produces a finite snapshot of the surface at call time;
/// calling it again later may yield different records.
pub trait LocationSource {
    fn list(&self) -> Result<Vec<LocationRecord>, LocationSourceError>;
}
