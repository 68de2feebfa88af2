use super::{FormSchema, InputKind, PageMeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserSignupField {
    Email,
    Password,
    ConfirmPassword,
    Token,
}

/// Signup for an individual joining an existing company with an access token.
pub struct UserSignupForm;

impl FormSchema for UserSignupForm {
    type Field = UserSignupField;

    const PAGE: PageMeta = PageMeta {
        slug: "signup-user",
        path: "/authentication/signup-user",
        title: "Create your account",
        submit_label: "Create account",
        alternate_prompt: "Already have an account?",
        alternate_label: "Log in",
        alternate_href: "/authentication/login",
        success_flash: "Signup request received.",
    };

    const FIELDS: &'static [UserSignupField] = &[
        UserSignupField::Email,
        UserSignupField::Password,
        UserSignupField::ConfirmPassword,
        UserSignupField::Token,
    ];

    const ROWS: &'static [&'static [UserSignupField]] = &[
        &[UserSignupField::Email],
        &[UserSignupField::Password],
        &[UserSignupField::ConfirmPassword],
        &[UserSignupField::Token],
    ];

    fn name(field: UserSignupField) -> &'static str {
        match field {
            UserSignupField::Email => "email",
            UserSignupField::Password => "password",
            UserSignupField::ConfirmPassword => "confirmPassword",
            UserSignupField::Token => "token",
        }
    }

    fn label(field: UserSignupField) -> &'static str {
        match field {
            UserSignupField::Email => "Email",
            UserSignupField::Password => "Password",
            UserSignupField::ConfirmPassword => "Confirm Password",
            UserSignupField::Token => "Access Token",
        }
    }

    fn placeholder(field: UserSignupField) -> &'static str {
        match field {
            UserSignupField::Email => "Email",
            UserSignupField::Password | UserSignupField::ConfirmPassword => "Password",
            UserSignupField::Token => "Token",
        }
    }

    fn input_kind(field: UserSignupField) -> InputKind {
        match field {
            UserSignupField::Password | UserSignupField::ConfirmPassword => InputKind::Password,
            UserSignupField::Email | UserSignupField::Token => InputKind::Text,
        }
    }

    fn required_message(field: UserSignupField) -> &'static str {
        match field {
            UserSignupField::Email => "Email is required",
            UserSignupField::Password => "Password is required",
            UserSignupField::ConfirmPassword => "Please confirm your password",
            UserSignupField::Token => "Token is required",
        }
    }

    fn password_pair() -> Option<(UserSignupField, UserSignupField)> {
        Some((UserSignupField::Password, UserSignupField::ConfirmPassword))
    }
}
