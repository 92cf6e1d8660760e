//! Registration form session: values, focus, live feedback and the
//! submit/confirmation flow

use crate::config::Config;
use crate::effects::Transient;
use crate::form::{self, FeedbackBoard, FieldId, FormOutcome, FormValues, Trigger};
use log::info;
use std::time::{Duration, Instant};

/// Anything on the form that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    Submit,
    Clear,
}

impl FocusTarget {
    /// Focus order, top to bottom
    pub fn all() -> Vec<FocusTarget> {
        FieldId::all()
            .iter()
            .map(|&f| FocusTarget::Field(f))
            .chain([FocusTarget::Submit, FocusTarget::Clear])
            .collect()
    }

    pub fn field(&self) -> Option<FieldId> {
        match self {
            FocusTarget::Field(f) => Some(*f),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: FormValues,
    board: FeedbackBoard,
    focus: FocusTarget,
    busy: Transient,
    confirmation: Transient,
    busy_duration: Duration,
    confirmation_duration: Duration,
    submissions: u32,
}

impl RegistrationForm {
    pub fn new(config: &Config) -> Self {
        Self {
            values: FormValues::new(),
            board: FeedbackBoard::new(),
            focus: FocusTarget::Field(FieldId::FullName),
            busy: Transient::new(),
            confirmation: Transient::new(),
            busy_duration: config.effects.submit_busy(),
            confirmation_duration: config.effects.confirmation(),
            submissions: 0,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn board(&self) -> &FeedbackBoard {
        &self.board
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Accepted submissions this session
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Move focus as the user would: the old field blurs, the new one focuses.
    /// Ignored while the confirmation hides the form.
    pub fn focus_on(&mut self, target: FocusTarget, now: Instant) {
        if target == self.focus || self.is_confirming(now) {
            return;
        }
        if let Some(old) = self.focus.field() {
            form::handle_trigger(old, Trigger::Blur, &self.values, &mut self.board);
        }
        self.focus = target;
        if let Some(new) = target.field() {
            form::handle_trigger(new, Trigger::Focus, &self.values, &mut self.board);
        }
    }

    pub fn focus_next(&mut self, now: Instant) {
        let order = FocusTarget::all();
        let pos = order.iter().position(|t| *t == self.focus).unwrap_or(0);
        self.focus_on(order[(pos + 1) % order.len()], now);
    }

    pub fn focus_prev(&mut self, now: Instant) {
        let order = FocusTarget::all();
        let pos = order.iter().position(|t| *t == self.focus).unwrap_or(0);
        let prev = pos.checked_sub(1).unwrap_or(order.len() - 1);
        self.focus_on(order[prev], now);
    }

    /// Type a character into the focused text field
    pub fn type_char(&mut self, c: char, now: Instant) {
        if self.is_confirming(now) {
            return;
        }
        let Some(field) = self.focus.field() else {
            return;
        };
        if let Some(text) = self.values.text_mut(field) {
            text.push(c);
            form::handle_trigger(field, Trigger::Input, &self.values, &mut self.board);
        }
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.is_confirming(now) {
            return;
        }
        let Some(field) = self.focus.field() else {
            return;
        };
        if let Some(text) = self.values.text_mut(field) {
            if text.pop().is_some() {
                form::handle_trigger(field, Trigger::Input, &self.values, &mut self.board);
            }
        }
    }

    /// Flip the terms checkbox
    pub fn toggle_terms(&mut self, now: Instant) {
        if self.is_confirming(now) {
            return;
        }
        self.values.terms = !self.values.terms;
        form::handle_trigger(FieldId::Terms, Trigger::Change, &self.values, &mut self.board);
    }

    /// Run the full validation pass.
    ///
    /// Returns `None` when the submit button is busy or the confirmation is
    /// showing. A rejected form moves focus to the first failing field
    /// without clearing its marker.
    pub fn submit(&mut self, now: Instant) -> Option<FormOutcome> {
        if self.is_busy(now) || self.is_confirming(now) {
            return None;
        }
        self.busy.arm(now, self.busy_duration);

        let result = form::submit(&self.values, &mut self.board);
        let decision = result.decision();
        match decision {
            FormOutcome::Accepted => {
                self.submissions += 1;
                self.confirmation.arm(now, self.confirmation_duration);
            }
            FormOutcome::Rejected { focus } => {
                self.focus = FocusTarget::Field(focus);
            }
        }
        Some(decision)
    }

    /// Enter key on the focused element
    pub fn activate(&mut self, now: Instant) -> Option<FormOutcome> {
        if self.is_confirming(now) {
            return None;
        }
        match self.focus {
            FocusTarget::Clear => {
                self.clear();
                None
            }
            _ => self.submit(now),
        }
    }

    /// Empty every field, drop all feedback and hide the confirmation
    pub fn clear(&mut self) {
        self.values.clear();
        self.board.reset();
        self.confirmation.cancel();
    }

    /// Advance timers. Returns true when an expired confirmation reset the form.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.confirmation.take_expired(now) {
            info!("Registration confirmation dismissed, form reset");
            self.clear();
            self.focus = FocusTarget::Field(FieldId::FullName);
            return true;
        }
        false
    }

    pub fn is_busy(&self, now: Instant) -> bool {
        self.busy.is_active(now)
    }

    /// Form hidden, confirmation visible
    pub fn is_confirming(&self, now: Instant) -> bool {
        self.confirmation.is_active(now)
    }

    pub fn confirmation_remaining(&self, now: Instant) -> Option<Duration> {
        self.confirmation.remaining(now)
    }

    pub fn submit_label(&self, now: Instant) -> &'static str {
        if self.is_busy(now) {
            "Processing..."
        } else {
            "Register"
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
