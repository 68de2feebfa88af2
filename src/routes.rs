use actix_web::web;

use crate::forms::{CompanySignupForm, FormSchema, LoginForm, UserSignupForm};
use crate::handlers::{auth_handlers, home};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index));
    form_routes::<LoginForm>(cfg);
    form_routes::<UserSignupForm>(cfg);
    form_routes::<CompanySignupForm>(cfg);
}

fn form_routes<S: FormSchema>(cfg: &mut web::ServiceConfig) {
    cfg.route(S::PAGE.path, web::get().to(auth_handlers::page::<S>))
        .route(S::PAGE.path, web::post().to(auth_handlers::submit::<S>))
        .route(&S::PAGE.field_endpoint(), web::post().to(auth_handlers::field_change::<S>));
}
