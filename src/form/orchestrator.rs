//! Form orchestration: full passes on submit, single-field passes on
//! real-time triggers

use super::feedback::{Feedback, FeedbackSink, FormOutcome};
use super::rules;
use super::{FieldId, StrengthTier, ValidationOutcome};
use log::{debug, info};

/// Read access to current field values
pub trait FieldSource {
    /// Raw text of a text input; checkbox fields read as empty
    fn text(&self, field: FieldId) -> &str;

    /// State of a checkbox input; text fields read as unchecked
    fn checked(&self, field: FieldId) -> bool;
}

/// UI event that may re-validate a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Field gained focus
    Focus,
    /// Field lost focus
    Blur,
    /// Field text changed
    Input,
    /// Checkbox toggled
    Change,
}

/// Raw values of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub website: String,
    pub terms: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable text buffer of a text field
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FullName => Some(&mut self.full_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            FieldId::Age => Some(&mut self.age),
            FieldId::Website => Some(&mut self.website),
            FieldId::Terms => None,
        }
    }

    /// Empty every input
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl FieldSource for FormValues {
    fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Age => &self.age,
            FieldId::Website => &self.website,
            FieldId::Terms => "",
        }
    }

    fn checked(&self, field: FieldId) -> bool {
        field == FieldId::Terms && self.terms
    }
}

/// Outcome of one field rule, with the strength tier for the password field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub field: FieldId,
    pub outcome: ValidationOutcome,
    pub strength: Option<StrengthTier>,
}

impl FieldReport {
    fn plain(field: FieldId, outcome: ValidationOutcome) -> Self {
        Self {
            field,
            outcome,
            strength: None,
        }
    }

    /// Push this report to a sink
    fn render(&self, sink: &mut impl FeedbackSink) {
        sink.field(self.field, Feedback::from(&self.outcome));
        if let Some(tier) = self.strength {
            sink.strength(tier);
        }
    }
}

/// Ordered outcomes of a full validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    reports: Vec<FieldReport>,
}

impl FormResult {
    /// True only when every field rule passed
    pub fn is_valid(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.is_valid())
    }

    pub fn reports(&self) -> &[FieldReport] {
        &self.reports
    }

    pub fn outcome(&self, field: FieldId) -> Option<&ValidationOutcome> {
        self.reports
            .iter()
            .find(|r| r.field == field)
            .map(|r| &r.outcome)
    }

    /// First field in form order whose rule failed
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.reports
            .iter()
            .find(|r| !r.outcome.is_valid())
            .map(|r| r.field)
    }

    pub fn invalid_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.outcome.is_valid()).count()
    }

    pub fn strength(&self) -> StrengthTier {
        self.reports
            .iter()
            .find_map(|r| r.strength)
            .unwrap_or_default()
    }

    pub fn decision(&self) -> FormOutcome {
        match self.first_invalid() {
            None => FormOutcome::Accepted,
            Some(focus) => FormOutcome::Rejected { focus },
        }
    }
}

/// Run the rule for a single field
pub fn validate_field(field: FieldId, source: &impl FieldSource) -> FieldReport {
    let value = source.text(field);
    match field {
        FieldId::FullName => FieldReport::plain(field, rules::full_name(value)),
        FieldId::Email => FieldReport::plain(field, rules::email(value)),
        FieldId::Phone => FieldReport::plain(field, rules::phone(value)),
        FieldId::Password => {
            let check = rules::password(value);
            FieldReport {
                field,
                outcome: check.outcome,
                strength: Some(check.strength),
            }
        }
        FieldId::ConfirmPassword => FieldReport::plain(
            field,
            rules::confirm_password(value, source.text(FieldId::Password)),
        ),
        FieldId::Age => FieldReport::plain(field, rules::age(value)),
        FieldId::Website => FieldReport::plain(field, rules::website(value)),
        FieldId::Terms => {
            FieldReport::plain(field, rules::terms_accepted(source.checked(field)))
        }
    }
}

/// Run every rule in form order without stopping at the first failure
pub fn validate_all(source: &impl FieldSource) -> FormResult {
    let reports = FieldId::all()
        .iter()
        .map(|&field| validate_field(field, source))
        .collect();
    FormResult { reports }
}

/// Full validation on submission: reset markers, report every field, then
/// report the overall decision.
pub fn submit(source: &impl FieldSource, sink: &mut impl FeedbackSink) -> FormResult {
    for &field in FieldId::all() {
        sink.field(field, Feedback::Clear);
    }

    let result = validate_all(source);
    for report in result.reports() {
        report.render(sink);
    }

    let decision = result.decision();
    match decision {
        FormOutcome::Accepted => info!("Form submitted successfully"),
        FormOutcome::Rejected { focus } => info!(
            "Form validation failed: {} field(s) invalid, first is {}",
            result.invalid_count(),
            focus.id()
        ),
    }
    sink.form(decision);

    result
}

/// Real-time reaction to a field event.
///
/// Focus always clears the field's marker. Otherwise the field is
/// re-validated only when the trigger is the one it listens to; the report is
/// returned when that happens.
pub fn handle_trigger(
    field: FieldId,
    trigger: Trigger,
    source: &impl FieldSource,
    sink: &mut impl FeedbackSink,
) -> Option<FieldReport> {
    if trigger == Trigger::Focus {
        sink.field(field, Feedback::Clear);
        return None;
    }

    if trigger != field.live_trigger() {
        return None;
    }

    let report = validate_field(field, source);
    debug!(
        "{} re-validated on {:?}: {:?}",
        field.id(),
        trigger,
        report.outcome
    );
    report.render(sink);
    Some(report)
}
