//! Registration form validation engine
//!
//! Field rules are pure functions over primitive values. The orchestrator
//! runs them, aggregates a [`FormResult`] and reports to a [`FeedbackSink`].

mod feedback;
pub mod orchestrator;
pub mod rules;
pub mod strength;

pub use feedback::{Feedback, FeedbackBoard, FeedbackSink, FieldState, FormOutcome};
pub use orchestrator::{
    handle_trigger, submit, validate_all, validate_field, FieldReport, FieldSource, FormResult,
    FormValues, Trigger,
};
pub use strength::{StrengthTier, Tone};

/// Stable identifier of every form input, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Age,
    Website,
    Terms,
}

impl FieldId {
    /// Fixed order in which a full validation pass runs the rules
    pub fn all() -> &'static [FieldId] {
        &[
            Self::FullName,
            Self::Email,
            Self::Phone,
            Self::Password,
            Self::ConfirmPassword,
            Self::Age,
            Self::Website,
            Self::Terms,
        ]
    }

    /// Element identifier used by the page markup
    pub fn id(&self) -> &'static str {
        match self {
            Self::FullName => "fullname",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm-password",
            Self::Age => "age",
            Self::Website => "website",
            Self::Terms => "terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Age => "Age",
            Self::Website => "Website",
            Self::Terms => "I agree to the Terms and Conditions",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Password => 3,
            Self::ConfirmPassword => 4,
            Self::Age => 5,
            Self::Website => 6,
            Self::Terms => 7,
        }
    }

    /// Whether an empty value is acceptable
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Phone | Self::Age | Self::Website)
    }

    /// Whether the input holds text rather than a checkbox state
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Terms)
    }

    /// Whether typed characters should be masked on screen
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Event that re-validates this field in real time
    pub fn live_trigger(&self) -> Trigger {
        match self {
            Self::Password => Trigger::Input,
            Self::Terms => Trigger::Change,
            _ => Trigger::Blur,
        }
    }
}

/// Category of a failed field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    TooShort,
    InvalidCharacters,
    InvalidFormat,
    TooWeak,
    Mismatch,
    OutOfRange,
}

/// Result of running one field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid {
        kind: ErrorKind,
        message: &'static str,
    },
}

impl ValidationOutcome {
    pub fn invalid(kind: ErrorKind, message: &'static str) -> Self {
        Self::Invalid { kind, message }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Valid => None,
            Self::Invalid { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message, .. } => Some(*message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_matches_index() {
        for (i, field) in FieldId::all().iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn live_triggers() {
        assert_eq!(FieldId::Password.live_trigger(), Trigger::Input);
        assert_eq!(FieldId::Terms.live_trigger(), Trigger::Change);
        assert_eq!(FieldId::Email.live_trigger(), Trigger::Blur);
        assert_eq!(FieldId::ConfirmPassword.live_trigger(), Trigger::Blur);
    }

    #[test]
    fn outcome_accessors() {
        let bad = ValidationOutcome::invalid(ErrorKind::Mismatch, "Passwords do not match");
        assert!(!bad.is_valid());
        assert_eq!(bad.kind(), Some(ErrorKind::Mismatch));
        assert_eq!(bad.message(), Some("Passwords do not match"));

        assert!(ValidationOutcome::Valid.is_valid());
        assert_eq!(ValidationOutcome::Valid.message(), None);
    }
}
