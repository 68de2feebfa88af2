use askama::Template;

use crate::forms::{FormSchema, FormState, InputKind, PageMeta};
use super::common::Navbar;

pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One input together with the inline messages currently shown for it.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub is_select: bool,
    pub value: String,
    pub options: Vec<OptionView>,
    pub errors: Vec<&'static str>,
}

impl FieldView {
    pub fn build<S: FormSchema>(state: &FormState<S>, field: S::Field) -> Self {
        let kind = S::input_kind(field);
        let value = state.value(field);
        let options = S::options(field)
            .into_iter()
            .map(|o| OptionView {
                value: o.value,
                label: o.label,
                selected: o.value == value.trim(),
            })
            .collect();
        Self {
            name: S::name(field),
            label: S::label(field),
            placeholder: S::placeholder(field),
            input_type: match kind {
                InputKind::Password => "password",
                InputKind::Text | InputKind::Select => "text",
            },
            is_select: kind == InputKind::Select,
            value: value.to_string(),
            options,
            errors: state.messages_for(field),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Template)]
#[template(path = "auth_form.html")]
pub struct AuthFormTemplate {
    pub app_name: String,
    pub nav: Navbar,
    pub page: PageMeta,
    pub field_endpoint: String,
    pub rows: Vec<Vec<FieldView>>,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl AuthFormTemplate {
    pub fn build<S: FormSchema>(
        state: &FormState<S>,
        app_name: String,
        csrf_token: String,
        flash: Option<String>,
    ) -> Self {
        let rows = S::ROWS
            .iter()
            .map(|row| row.iter().map(|f| FieldView::build(state, *f)).collect())
            .collect();
        Self {
            app_name,
            nav: Navbar::build(),
            page: S::PAGE,
            field_endpoint: S::PAGE.field_endpoint(),
            rows,
            csrf_token,
            flash,
        }
    }
}
