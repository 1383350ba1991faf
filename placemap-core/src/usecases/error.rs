use crate::{gateways::source::LocationSourceError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] LocationSourceError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
