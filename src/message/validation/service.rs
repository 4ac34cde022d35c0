//! Validation service implementation.
//!
//! Provides the default implementation of the `MessageValidator` port,
//! combining individual validation rules into a comprehensive validator,
//! plus the normalization path that promotes an accepted draft into the
//! typed [`Message`] record.

use crate::message::{
    domain::{ConversationId, Message, MessageDraft, MessageId, Role},
    error::ValidationError,
    ports::validator::{MessageValidator, ValidationConfig, ValidationResult},
    validation::rules,
};
use mockable::Clock;

/// Default implementation of the message validator.
///
/// Applies all validation rules in order, collecting errors to provide
/// comprehensive feedback rather than failing on the first error. With the
/// default configuration, acceptance agrees with the boolean predicate
/// [`rules::is_valid_message`] for drafts within the content length limit.
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::MessageDraft;
/// use colloquy::message::ports::validator::MessageValidator;
/// use colloquy::message::validation::service::DefaultMessageValidator;
///
/// let draft = MessageDraft::new()
///     .with_id("m-1")
///     .with_conversation_id("c-1")
///     .with_content("Hello")
///     .with_role("user");
///
/// let validator = DefaultMessageValidator::new();
/// assert!(validator.validate(&draft).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultMessageValidator {
    config: ValidationConfig,
}

impl DefaultMessageValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a draft and promotes it into a normalized [`Message`].
    ///
    /// Identifiers are wrapped in their newtypes, the raw role text is
    /// parsed into the closed enumeration, and a missing `created_at` is
    /// stamped from the injected clock. The draft itself is only inspected,
    /// never mutated.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails, combining multiple
    /// failures via `ValidationError::Multiple`. Even under a lenient
    /// configuration, blank content is rejected here because the normalized
    /// record guarantees non-empty content by construction.
    pub fn normalize(
        &self,
        draft: &MessageDraft,
        clock: &impl Clock,
    ) -> ValidationResult<Message> {
        self.validate(draft)?;

        let id = draft
            .id
            .clone()
            .map(MessageId::new)
            .ok_or(ValidationError::MissingId)?;
        let conversation_id = draft
            .conversation_id
            .clone()
            .map(ConversationId::new)
            .ok_or(ValidationError::MissingConversationId)?;
        let role = draft
            .role
            .as_deref()
            .ok_or(ValidationError::MissingRole)
            .and_then(|text| Role::try_from(text).map_err(ValidationError::from))?;
        let content = draft.content.clone().ok_or(ValidationError::EmptyContent)?;

        let mut builder = Message::builder(conversation_id, role)
            .with_id(id)
            .with_content(content);
        if let Some(created_at) = draft.created_at {
            builder = builder.with_created_at(created_at);
        }

        builder.build(clock).map_err(ValidationError::from)
    }
}

impl Default for DefaultMessageValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageValidator for DefaultMessageValidator {
    fn validate(&self, draft: &MessageDraft) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_structure(draft) {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = self.validate_content(draft) {
            collect_errors(&mut errors, e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    fn validate_structure(&self, draft: &MessageDraft) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = rules::validate_id(draft) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_conversation_id(draft) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_role(draft) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    fn validate_content(&self, draft: &MessageDraft) -> ValidationResult<()> {
        rules::validate_content(draft, &self.config)
    }
}

/// Helper function to collect errors, flattening `Multiple` variants.
fn collect_errors(errors: &mut Vec<ValidationError>, error: ValidationError) {
    match error {
        ValidationError::Multiple(inner) => errors.extend(inner),
        other => errors.push(other),
    }
}
