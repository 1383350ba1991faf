use placemap_core::{
    gateways::source::LocationSourceError, repositories::Error as RepoError,
    usecases::Error as UsecaseError,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Business(UsecaseError::Repo(err))
    }
}

impl From<LocationSourceError> for AppError {
    fn from(err: LocationSourceError) -> Self {
        AppError::Business(UsecaseError::Source(err))
    }
}
