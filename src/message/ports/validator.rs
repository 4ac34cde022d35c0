//! Validator port for message validation.
//!
//! Defines the abstract interface for validating message drafts at
//! ingestion boundaries.

use crate::message::{domain::MessageDraft, error::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for message draft validation.
///
/// Validation occurs in layers:
/// 1. Structure validation (identifiers present, role recognised)
/// 2. Content validation (emptiness, length)
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and thread-safe
pub trait MessageValidator: Send + Sync {
    /// Validates a draft against all rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any validation rule fails.
    /// Multiple failures are combined using `ValidationError::Multiple`.
    fn validate(&self, draft: &MessageDraft) -> ValidationResult<()>;

    /// Validates only the structural aspects of a draft.
    ///
    /// Checks:
    /// - Message identifier is present and non-empty
    /// - Conversation identifier is present and non-empty
    /// - Role is present and a member of the closed enumeration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if structural validation fails.
    fn validate_structure(&self, draft: &MessageDraft) -> ValidationResult<()>;

    /// Validates the content of a draft.
    ///
    /// Checks:
    /// - Content is non-empty and not whitespace-only (if configured)
    /// - Content does not exceed the configured length limit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if content validation fails.
    fn validate_content(&self, draft: &MessageDraft) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// Allows customisation of validation behaviour for different contexts.
///
/// # Examples
///
/// ```
/// use colloquy::message::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(!config.allow_empty_content);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(lenient.allow_empty_content);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum content length in characters.
    pub max_content_chars: usize,
    /// Whether to allow empty or whitespace-only content.
    pub allow_empty_content: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_content_chars: 100_000,
            allow_empty_content: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration that allows empty content.
    ///
    /// Useful for testing or when relaxed validation is acceptable,
    /// e.g. placeholder messages streamed before their first token.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_empty_content: true,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with reduced limits.
    ///
    /// Useful for resource-constrained environments.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_content_chars: 10_000,
            allow_empty_content: false,
        }
    }
}
