use thiserror::Error;

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Failure raised while rendering bytecode.
///
/// Renderers never wrap this on the way up; whatever failed at the deepest
/// level is what the caller of [`crate::Translator::translate`] receives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Nesting exceeds the configured depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}
