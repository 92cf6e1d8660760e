//! Field feedback rendering state

use super::{FieldId, StrengthTier, ValidationOutcome};

/// Instruction for one field's visible feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Hide the error message and drop any marker
    Clear,
    /// Show the message and mark the field as failing
    ShowError(&'static str),
    /// Hide the error message and mark the field as passing
    ShowSuccess,
}

impl From<&ValidationOutcome> for Feedback {
    fn from(outcome: &ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid => Feedback::ShowSuccess,
            ValidationOutcome::Invalid { message, .. } => Feedback::ShowError(*message),
        }
    }
}

/// Overall decision after a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Every rule passed; run the confirmation flow
    Accepted,
    /// Submission suppressed; focus moves to the first failing field
    Rejected { focus: FieldId },
}

/// Receiver of everything the orchestrator wants shown
pub trait FeedbackSink {
    fn field(&mut self, field: FieldId, feedback: Feedback);

    fn strength(&mut self, tier: StrengthTier);

    fn form(&mut self, outcome: FormOutcome);
}

/// Visible state of one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Neutral,
    Valid,
    Invalid(&'static str),
}

impl FieldState {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(message) => Some(*message),
            _ => None,
        }
    }
}

/// Feedback sink that keeps the latest state of every field
#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    states: [FieldState; 8],
    strength: StrengthTier,
    last_outcome: Option<FormOutcome>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, field: FieldId) -> &FieldState {
        &self.states[field.index()]
    }

    pub fn strength_tier(&self) -> StrengthTier {
        self.strength
    }

    pub fn last_outcome(&self) -> Option<FormOutcome> {
        self.last_outcome
    }

    /// First field, in form order, currently showing an error
    pub fn first_error(&self) -> Option<FieldId> {
        FieldId::all()
            .iter()
            .copied()
            .find(|f| self.state(*f).is_error())
    }

    pub fn error_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_error()).count()
    }

    /// Return every field to neutral
    pub fn clear_all(&mut self) {
        self.states = Default::default();
    }

    /// Back to the freshly loaded page state
    pub fn reset(&mut self) {
        self.clear_all();
        self.strength = StrengthTier::NoPassword;
        self.last_outcome = None;
    }
}

impl FeedbackSink for FeedbackBoard {
    fn field(&mut self, field: FieldId, feedback: Feedback) {
        self.states[field.index()] = match feedback {
            Feedback::Clear => FieldState::Neutral,
            Feedback::ShowError(message) => FieldState::Invalid(message),
            Feedback::ShowSuccess => FieldState::Valid,
        };
    }

    fn strength(&mut self, tier: StrengthTier) {
        self.strength = tier;
    }

    fn form(&mut self, outcome: FormOutcome) {
        self.last_outcome = Some(outcome);
    }
}
