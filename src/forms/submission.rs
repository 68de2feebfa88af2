//! The action fired when a form validates.
//!
//! No backend exists yet, so the default sink only records the submission in
//! the log. Account creation and login would be wired in here.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{FormSchema, FormState, InputKind};

const REDACTED: &str = "********";

/// A validated form, detached from its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form: &'static str,
    pub fields: Vec<SubmittedField>,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedField {
    pub name: &'static str,
    pub value: String,
    pub secret: bool,
}

impl Submission {
    pub fn from_state<S: FormSchema>(state: &FormState<S>) -> Self {
        let fields = state
            .entries()
            .map(|(field, value)| SubmittedField {
                name: S::name(field),
                value: value.to_string(),
                secret: S::input_kind(field) == InputKind::Password,
            })
            .collect();
        Self {
            form: S::PAGE.slug,
            fields,
            received_at: Utc::now(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Renders the submission with secret values masked.
impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:", self.form, self.received_at.to_rfc3339())?;
        for field in &self.fields {
            let value = if field.secret { REDACTED } else { field.value.as_str() };
            write!(f, " {}={:?}", field.name, value)?;
        }
        Ok(())
    }
}

pub trait SubmissionSink: Send + Sync {
    fn accept(&self, submission: Submission);
}

/// Records submissions in the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&self, submission: Submission) {
        log::info!("Form submitted: {submission}");
    }
}
