use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::take_flash;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{HomeTemplate, Navbar, NotFoundTemplate};

pub async fn index(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let flash = take_flash(&session);
    render(HomeTemplate::build(config.app_name.clone(), flash))
}

pub async fn not_found(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    let html = askama::Template::render(&NotFoundTemplate {
        app_name: config.app_name.clone(),
        nav: Navbar::build(),
    })?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
