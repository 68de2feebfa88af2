use super::{FormSchema, InputKind, PageMeta, SelectOption};
use crate::auth::validate;

/// Value of the hidden "Subscription" option the select starts on.
pub const SUBSCRIPTION_PLACEHOLDER: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompanySignupField {
    Name,
    Surname,
    Middlename,
    Email,
    Password,
    Company,
    CompanyAddress,
    CompanyDomain,
    Subscription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTier {
    Free,
    One,
    Infinity,
}

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 3] = [Self::Free, Self::One, Self::Infinity];

    /// Option value submitted by the select.
    pub fn value(self) -> &'static str {
        match self {
            Self::Free => "1",
            Self::One => "2",
            Self::Infinity => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free Tier",
            Self::One => "Tier One",
            Self::Infinity => "Tier Infinity",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value.trim())
    }
}

/// Registers a new company together with its first (owner) account.
pub struct CompanySignupForm;

impl FormSchema for CompanySignupForm {
    type Field = CompanySignupField;

    const PAGE: PageMeta = PageMeta {
        slug: "signup-company",
        path: "/authentication/signup-company",
        title: "Register your company",
        submit_label: "Create account",
        alternate_prompt: "Already have an account?",
        alternate_label: "Log in",
        alternate_href: "/authentication/login",
        success_flash: "Company registration received.",
    };

    const FIELDS: &'static [CompanySignupField] = &[
        CompanySignupField::Name,
        CompanySignupField::Surname,
        CompanySignupField::Middlename,
        CompanySignupField::Email,
        CompanySignupField::Password,
        CompanySignupField::Company,
        CompanySignupField::CompanyAddress,
        CompanySignupField::CompanyDomain,
        CompanySignupField::Subscription,
    ];

    const ROWS: &'static [&'static [CompanySignupField]] = &[
        &[CompanySignupField::Name, CompanySignupField::Surname, CompanySignupField::Middlename],
        &[CompanySignupField::Email, CompanySignupField::Password],
        &[CompanySignupField::Company, CompanySignupField::CompanyAddress],
        &[CompanySignupField::CompanyDomain, CompanySignupField::Subscription],
    ];

    fn name(field: CompanySignupField) -> &'static str {
        match field {
            CompanySignupField::Name => "name",
            CompanySignupField::Surname => "surname",
            CompanySignupField::Middlename => "middlename",
            CompanySignupField::Email => "email",
            CompanySignupField::Password => "password",
            CompanySignupField::Company => "company",
            CompanySignupField::CompanyAddress => "companyAddress",
            CompanySignupField::CompanyDomain => "companyDomain",
            CompanySignupField::Subscription => "subscription",
        }
    }

    fn label(field: CompanySignupField) -> &'static str {
        match field {
            CompanySignupField::Name => "Name",
            CompanySignupField::Surname => "Surname",
            CompanySignupField::Middlename => "Middle Name",
            CompanySignupField::Email => "Email",
            CompanySignupField::Password => "Password",
            CompanySignupField::Company => "Company",
            CompanySignupField::CompanyAddress => "Company Address",
            CompanySignupField::CompanyDomain => "Company Domain",
            CompanySignupField::Subscription => "Subscription",
        }
    }

    fn input_kind(field: CompanySignupField) -> InputKind {
        match field {
            CompanySignupField::Password => InputKind::Password,
            CompanySignupField::Subscription => InputKind::Select,
            _ => InputKind::Text,
        }
    }

    fn options(field: CompanySignupField) -> Vec<SelectOption> {
        match field {
            CompanySignupField::Subscription => SubscriptionTier::ALL
                .into_iter()
                .map(|t| SelectOption { value: t.value(), label: t.label() })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn is_required(field: CompanySignupField) -> bool {
        field != CompanySignupField::Middlename
    }

    fn required_message(field: CompanySignupField) -> &'static str {
        match field {
            CompanySignupField::Name => "Name is required",
            CompanySignupField::Surname => "Surname is required",
            CompanySignupField::Middlename => "",
            CompanySignupField::Email => "Email is required",
            CompanySignupField::Password => "Password is required",
            CompanySignupField::Company => "Company name is required",
            CompanySignupField::CompanyAddress => "Company address is required",
            CompanySignupField::CompanyDomain => "Company domain is required",
            CompanySignupField::Subscription => "Please select a subscription tier",
        }
    }

    fn is_missing(field: CompanySignupField, value: &str) -> bool {
        match field {
            CompanySignupField::Subscription => validate::is_unselected(
                value,
                SUBSCRIPTION_PLACEHOLDER,
                |v| SubscriptionTier::from_value(v).is_some(),
            ),
            _ => validate::is_blank(value),
        }
    }
}
