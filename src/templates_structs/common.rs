use askama::Template;

use crate::forms::{CompanySignupForm, FormSchema, UserSignupForm, LoginForm};

pub struct NavLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Top navigation shared by every page.
pub struct Navbar {
    pub items: Vec<NavLink>,
    pub login_href: &'static str,
    pub signup_href: &'static str,
    pub company_signup_href: &'static str,
}

impl Navbar {
    pub fn build() -> Self {
        let items = vec![
            NavLink { label: "Home", url: "/" },
            NavLink { label: "Features", url: "/#features" },
            NavLink { label: "Pricing", url: "/#pricing" },
        ];
        Self {
            items,
            login_href: LoginForm::PAGE.path,
            signup_href: UserSignupForm::PAGE.path,
            company_signup_href: CompanySignupForm::PAGE.path,
        }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub app_name: String,
    pub nav: Navbar,
}
