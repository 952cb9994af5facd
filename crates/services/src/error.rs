//! Shared error types for the services crate.

use thiserror::Error;

use content::PackError;

/// Errors emitted while assembling `AppServices`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Pack(#[from] PackError),
}
