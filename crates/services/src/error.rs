//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use portfolio_core::model::{
    CatalogError, CertificationId, ContactFormError, QuizError, SkillId,
};

/// Errors emitted while loading the static catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Errors emitted by `PortfolioService`.
///
/// Every variant leaves the session state untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PortfolioError {
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Contact(#[from] ContactFormError),
    #[error("unknown skill: {0:?}")]
    UnknownSkill(SkillId),
    #[error("unknown certification: {0:?}")]
    UnknownCertification(CertificationId),
}
