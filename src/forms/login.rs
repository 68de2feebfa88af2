use super::{FormSchema, InputKind, PageMeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

pub struct LoginForm;

impl FormSchema for LoginForm {
    type Field = LoginField;

    const PAGE: PageMeta = PageMeta {
        slug: "login",
        path: "/authentication/login",
        title: "Log in with your company account",
        submit_label: "Log in",
        alternate_prompt: "Don't have an account?",
        alternate_label: "Sign up",
        alternate_href: "/authentication/signup-user",
        success_flash: "Login details received.",
    };

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password];

    const ROWS: &'static [&'static [LoginField]] = &[&[LoginField::Email], &[LoginField::Password]];

    fn name(field: LoginField) -> &'static str {
        match field {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    fn label(field: LoginField) -> &'static str {
        match field {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    fn input_kind(field: LoginField) -> InputKind {
        match field {
            LoginField::Email => InputKind::Text,
            LoginField::Password => InputKind::Password,
        }
    }

    fn required_message(field: LoginField) -> &'static str {
        match field {
            LoginField::Email => "Email is required",
            LoginField::Password => "Password is required",
        }
    }
}
