use log::{debug, error, info, warn};

use super::mailer::{prepare, EmailJsConfig, SubmitError};
use super::submission::{ContactSubmission, Field, FieldErrors};

/// Identifies one send attempt within one form session. Results carrying a
/// ticket from an earlier session, or from a superseded attempt, are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    session: u64,
    attempt: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Sending(Ticket),
    Submitted,
}

#[derive(Debug, Clone)]
pub struct FormState {
    submission: ContactSubmission,
    errors: FieldErrors,
    status: FormStatus,
    submit_error: bool,
    session: u64,
    attempts: u32,
}

impl FormState {
    pub fn new(selected_package: impl Into<String>) -> Self {
        Self {
            submission: ContactSubmission::new(selected_package),
            errors: FieldErrors::default(),
            status: FormStatus::Editing,
            submit_error: false,
            session: 0,
            attempts: 0,
        }
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[cfg(test)]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The generic "try again" flag.
    pub fn submit_error(&self) -> bool {
        self.submit_error
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, FormStatus::Sending(_))
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Editing && self.submission.accepted_terms
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        if self.is_submitted() {
            return;
        }
        self.submission.set(field, value);
        self.submit_error = false;
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        if self.is_submitted() {
            return;
        }
        self.submission.accepted_terms = accepted;
        self.submit_error = false;
        if accepted {
            self.errors.remove(Field::Terms);
        }
    }

    /// Validates and checks configuration. On success the form moves to
    /// `Sending` and the caller must deliver the returned snapshot exactly once.
    pub fn begin_submit(&mut self, config: &EmailJsConfig) -> Result<(Ticket, ContactSubmission), SubmitError> {
        if !self.can_submit() {
            if self.status == FormStatus::Editing {
                // disabled button; still surface why
                self.errors = self.submission.validate();
            }
            return Err(SubmitError::NotEditable);
        }

        if let Err(e) = prepare(config, &self.submission) {
            match &e {
                SubmitError::Invalid(errors) => self.errors = errors.clone(),
                SubmitError::ConfigurationMissing => {
                    error!("EmailJS configuration is missing: {}", config.missing().join(", "));
                    self.errors = FieldErrors::default();
                    self.submit_error = true;
                }
                other => warn!("Submission refused: {}", other),
            }
            return Err(e);
        }

        self.attempts += 1;
        let ticket = Ticket {
            session: self.session,
            attempt: self.attempts,
        };
        self.errors = FieldErrors::default();
        self.submit_error = false;
        self.status = FormStatus::Sending(ticket);
        info!("Sending lead for {}", self.submission.selected_package);
        Ok((ticket, self.submission.clone()))
    }

    /// Applies the delivery outcome. Returns false when the result was stale and
    /// therefore ignored.
    pub fn finish(&mut self, ticket: Ticket, result: Result<(), SubmitError>) -> bool {
        if ticket.session != self.session || self.status != FormStatus::Sending(ticket) {
            debug!("Discarding stale delivery result {:?}", ticket);
            return false;
        }
        match result {
            Ok(()) => {
                info!("Lead delivered");
                self.status = FormStatus::Submitted;
            }
            Err(e) => {
                error!("Lead delivery failed: {}", e);
                self.status = FormStatus::Editing;
                self.submit_error = true;
            }
        }
        true
    }

    /// Starts a new session, e.g. after another package was chosen.
    pub fn reset(&mut self, selected_package: impl Into<String>) {
        let session = self.session + 1;
        *self = Self::new(selected_package);
        self.session = session;
    }

    /// The view is going away; anything still in flight must not land.
    pub fn teardown(&mut self) {
        self.session += 1;
        if self.is_sending() {
            self.status = FormStatus::Editing;
        }
    }
}
