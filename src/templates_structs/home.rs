use askama::Template;

use crate::forms::signup_company::SubscriptionTier;
use super::common::Navbar;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub app_name: String,
    pub nav: Navbar,
    pub tiers: Vec<&'static str>,
    pub flash: Option<String>,
}

impl HomeTemplate {
    pub fn build(app_name: String, flash: Option<String>) -> Self {
        Self {
            app_name,
            nav: Navbar::build(),
            tiers: SubscriptionTier::ALL.into_iter().map(SubscriptionTier::label).collect(),
            flash,
        }
    }
}
