use thiserror::Error;

use crate::model::{CatalogError, ContactFormError, QuizError, SectionParseError, VariantParseError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Contact(#[from] ContactFormError),
    #[error(transparent)]
    Section(#[from] SectionParseError),
    #[error(transparent)]
    Variant(#[from] VariantParseError),
}
