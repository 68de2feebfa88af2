//! Form validation shared by the auth pages.
//!
//! Every form is a `FormSchema` (its fields, which ones are required, the
//! inline messages and page metadata). `FormState` holds the values and error
//! flags of one mounted form and implements the two operations the pages
//! drive: `on_field_change` and `submit`.
//!
//! Each field is either clean or invalid. It only becomes invalid on a submit
//! that finds it missing, and only becomes clean again when it is edited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::marker::PhantomData;

use serde::Serialize;

use crate::auth::validate;

pub mod login;
pub mod signup_company;
pub mod signup_user;
pub mod store;
pub mod submission;

pub use login::LoginForm;
pub use signup_company::CompanySignupForm;
pub use signup_user::UserSignupForm;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords don't match";

/// Static description of the page a form lives on.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub slug: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub alternate_prompt: &'static str,
    pub alternate_label: &'static str,
    pub alternate_href: &'static str,
    pub success_flash: &'static str,
}

impl PageMeta {
    pub fn session_key(&self) -> String {
        format!("form.{}", self.slug)
    }

    pub fn field_endpoint(&self) -> String {
        format!("{}/field", self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub trait FormSchema: 'static {
    type Field: Copy + Ord + Debug + Send + Sync + 'static;

    const PAGE: PageMeta;

    /// Every field in display order.
    const FIELDS: &'static [Self::Field];

    /// Fields grouped into the rows they are laid out in.
    const ROWS: &'static [&'static [Self::Field]];

    fn name(field: Self::Field) -> &'static str;

    fn label(field: Self::Field) -> &'static str;

    fn placeholder(field: Self::Field) -> &'static str {
        Self::label(field)
    }

    fn input_kind(_field: Self::Field) -> InputKind {
        InputKind::Text
    }

    fn options(_field: Self::Field) -> Vec<SelectOption> {
        Vec::new()
    }

    fn is_required(_field: Self::Field) -> bool {
        true
    }

    /// Message shown under a required field that was submitted empty.
    fn required_message(field: Self::Field) -> &'static str;

    fn is_missing(_field: Self::Field, value: &str) -> bool {
        validate::is_blank(value)
    }

    /// `(password, confirmation)` pair checked for equality on submit.
    fn password_pair() -> Option<(Self::Field, Self::Field)> {
        None
    }

    fn field_by_name(name: &str) -> Option<Self::Field> {
        Self::FIELDS.iter().copied().find(|f| Self::name(*f) == name)
    }
}

/// Error flags of one form. A field is flagged while it is in `missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    missing: BTreeSet<F>,
    password_mismatch: bool,
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn is_flagged(&self, field: F) -> bool {
        self.missing.contains(&field)
    }

    pub fn password_mismatch(&self) -> bool {
        self.password_mismatch
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && !self.password_mismatch
    }

    /// Flagged fields in field order.
    pub fn flagged(&self) -> impl Iterator<Item = F> + '_ {
        self.missing.iter().copied()
    }

    /// Number of failing checks, counting the password mismatch as one.
    pub fn count(&self) -> usize {
        self.missing.len() + usize::from(self.password_mismatch)
    }
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            missing: BTreeSet::new(),
            password_mismatch: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

/// A field and the inline message currently shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub field: &'static str,
    pub message: &'static str,
}

/// Values and error flags of one mounted form.
pub struct FormState<S: FormSchema> {
    values: BTreeMap<S::Field, String>,
    errors: FieldErrors<S::Field>,
    _schema: PhantomData<fn() -> S>,
}

impl<S: FormSchema> Default for FormState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> Clone for FormState<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            errors: self.errors.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: FormSchema> FormState<S> {
    /// A freshly mounted form: every field empty, every field clean.
    pub fn new() -> Self {
        Self {
            values: S::FIELDS.iter().map(|f| (*f, String::new())).collect(),
            errors: FieldErrors::default(),
            _schema: PhantomData,
        }
    }

    pub fn value(&self, field: S::Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors<S::Field> {
        &self.errors
    }

    /// Apply an edit. Returns true if the edit cleared a visible error.
    pub fn on_field_change(&mut self, field: S::Field, value: impl Into<String>) -> bool {
        self.values.insert(field, value.into());

        let mut cleared = self.errors.missing.remove(&field);
        if let Some((password, confirm)) = S::password_pair() {
            if (field == password || field == confirm) && self.errors.password_mismatch {
                self.errors.password_mismatch = false;
                cleared = true;
            }
        }
        cleared
    }

    /// Recompute every error flag from the current values.
    pub fn submit(&mut self) -> Outcome {
        let missing = S::FIELDS
            .iter()
            .copied()
            .filter(|f| S::is_required(*f) && S::is_missing(*f, self.value(*f)))
            .collect();
        let password_mismatch = S::password_pair()
            .is_some_and(|(p, c)| validate::passwords_differ(self.value(p), self.value(c)));

        self.errors = FieldErrors {
            missing,
            password_mismatch,
        };

        if self.errors.is_empty() {
            Outcome::Valid
        } else {
            Outcome::Invalid
        }
    }

    /// Messages shown under `field`. The mismatch message sits under the
    /// confirmation field.
    pub fn messages_for(&self, field: S::Field) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if self.errors.is_flagged(field) {
            messages.push(S::required_message(field));
        }
        if self.errors.password_mismatch
            && S::password_pair().is_some_and(|(_, confirm)| confirm == field)
        {
            messages.push(PASSWORD_MISMATCH_MESSAGE);
        }
        messages
    }

    /// Every visible message, in field order.
    pub fn messages(&self) -> Vec<FieldMessage> {
        S::FIELDS
            .iter()
            .flat_map(|f| {
                self.messages_for(*f)
                    .into_iter()
                    .map(|message| FieldMessage {
                        field: S::name(*f),
                        message,
                    })
            })
            .collect()
    }

    /// `(field, value)` pairs in field order.
    pub fn entries(&self) -> impl Iterator<Item = (S::Field, &str)> + '_ {
        S::FIELDS.iter().map(|f| (*f, self.value(*f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_empty_and_clean() {
        let state = FormState::<LoginForm>::new();
        for field in LoginForm::FIELDS {
            assert_eq!(state.value(*field), "");
        }
        assert!(state.errors().is_empty());
        assert!(state.messages().is_empty());
    }

    #[test]
    fn field_lookup_uses_wire_names() {
        assert_eq!(
            CompanySignupForm::field_by_name("companyAddress"),
            Some(signup_company::CompanySignupField::CompanyAddress)
        );
        assert_eq!(CompanySignupForm::field_by_name("company_address"), None);
    }

    #[test]
    fn session_keys_are_distinct_per_form() {
        let keys = [
            LoginForm::PAGE.session_key(),
            UserSignupForm::PAGE.session_key(),
            CompanySignupForm::PAGE.session_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_eq!(LoginForm::PAGE.field_endpoint(), "/authentication/login/field");
    }
}
