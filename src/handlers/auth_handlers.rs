use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::session;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::forms::store::FormStore;
use crate::forms::submission::{Submission, SubmissionSink};
use crate::forms::{FieldMessage, FormSchema, FormState, Outcome};
use crate::templates_structs::AuthFormTemplate;

/// Urlencoded body of a full form submit. Field names follow the schema.
#[derive(Deserialize)]
pub struct SubmittedForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

#[derive(Deserialize)]
pub struct FieldChange {
    pub field: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Serialize)]
pub struct FieldChangeResponse {
    pub field: &'static str,
    pub cleared: bool,
    pub errors: Vec<FieldMessage>,
}

fn render_form<S: FormSchema>(
    config: &AppConfig,
    session: &Session,
    state: &FormState<S>,
) -> Result<HttpResponse, AppError> {
    let csrf_token = session::csrf_token(session)?;
    let flash = session::take_flash(session);
    render(AuthFormTemplate::build(state, config.app_name.clone(), csrf_token, flash))
}

/// Mount the form: every visit starts from a clean state.
pub async fn page<S: FormSchema>(
    config: web::Data<AppConfig>,
    store: web::Data<FormStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let state = session::mount_form::<S>(&session, &store)?;
    render_form(&config, &session, &state)
}

pub async fn submit<S: FormSchema>(
    config: web::Data<AppConfig>,
    store: web::Data<FormStore>,
    session: Session,
    sink: web::Data<dyn SubmissionSink>,
    form: web::Form<SubmittedForm>,
) -> Result<HttpResponse, AppError> {
    session::check_csrf(&session, &form.csrf_token)?;

    let mut state = session::load_form::<S>(&session, &store)?;
    for &field in S::FIELDS {
        let posted = form.fields.get(S::name(field)).map_or("", String::as_str);
        if posted != state.value(field) {
            state.on_field_change(field, posted);
        }
    }

    match state.submit() {
        Outcome::Valid => {
            sink.accept(Submission::from_state(&state));
            session::clear_form::<S>(&session, &store);
            session::set_flash(&session, S::PAGE.success_flash)?;
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", S::PAGE.path))
                .finish())
        }
        Outcome::Invalid => {
            log::debug!(
                "Rejected {} submit with {} failing check(s)",
                S::PAGE.slug,
                state.errors().count()
            );
            let html = render_form(&config, &session, &state);
            session::store_form(&session, &store, state)?;
            html
        }
    }
}

/// Apply a single edit and report which inline messages remain.
pub async fn field_change<S: FormSchema>(
    store: web::Data<FormStore>,
    session: Session,
    body: web::Json<FieldChange>,
) -> Result<HttpResponse, AppError> {
    session::check_csrf(&session, &body.csrf_token)?;

    let field = S::field_by_name(&body.field)
        .ok_or_else(|| AppError::UnknownField(body.field.clone()))?;

    let mut state = session::load_form::<S>(&session, &store)?;
    let cleared = state.on_field_change(field, body.value.as_str());
    let errors = state.messages();
    session::store_form(&session, &store, state)?;

    if cleared {
        log::debug!("Cleared {} error on {} form", S::name(field), S::PAGE.slug);
    }

    Ok(HttpResponse::Ok().json(FieldChangeResponse {
        field: S::name(field),
        cleared,
        errors,
    }))
}
