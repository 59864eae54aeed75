//! The module contains the errors the registry can throw.

use sea_orm::DbErr;
use thiserror::Error;

/// Registry custom errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An insert conflicted on the username but the conflicting row
    /// could not be read back.
    #[error("\"{0}\" conflicted on insert but is not present!")]
    Corrupted(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}
