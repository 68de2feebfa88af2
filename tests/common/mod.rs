//! Shared test infrastructure for the page-level tests.
//!
//! - `test_app!(sink)` builds the full app with a fresh session key
//! - `Browser` carries the session cookie between requests
//! - `RecordingSink` captures accepted submissions

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::test::{self, TestRequest};
use regex::Regex;

use shorter_url::forms::submission::{Submission, SubmissionSink};

// ============================================================================
// APP SETUP
// ============================================================================

#[macro_export]
macro_rules! test_app {
    ($sink:expr) => {{
        let sink: std::sync::Arc<dyn shorter_url::forms::submission::SubmissionSink> = $sink;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(shorter_url::auth::session::middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::new(
                    shorter_url::config::AppConfig::default(),
                ))
                .app_data(actix_web::web::Data::from(sink))
                .app_data(actix_web::web::Data::new(
                    shorter_url::forms::store::FormStore::new(),
                ))
                .configure(shorter_url::routes::configure)
                .default_service(actix_web::web::to(shorter_url::handlers::home::not_found)),
        )
        .await
    }};
}

#[derive(Default)]
pub struct RecordingSink {
    pub received: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn accept(&self, submission: Submission) {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(submission);
    }
}

// ============================================================================
// REQUESTS
// ============================================================================

pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Minimal cookie-carrying client around an initialised test service.
#[derive(Default)]
pub struct Browser {
    cookies: Vec<Cookie<'static>>,
}

impl Browser {
    /// Encoded size of every cookie the browser would send.
    pub fn cookie_bytes(&self) -> usize {
        self.cookies.iter().map(|c| c.name().len() + c.value().len()).sum()
    }

    pub async fn send<S, B>(&mut self, app: &S, mut req: TestRequest) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        for cookie in &self.cookies {
            req = req.cookie(cookie.clone());
        }
        let resp = test::call_service(app, req.to_request()).await;

        for cookie in resp.response().cookies() {
            let cookie = cookie.into_owned();
            self.cookies.retain(|c| c.name() != cookie.name());
            self.cookies.push(cookie);
        }

        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = test::read_body(resp).await;
        Page {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get<S, B>(&mut self, app: &S, uri: &str) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        self.send(app, TestRequest::get().uri(uri)).await
    }

    pub async fn post_form<S, B>(&mut self, app: &S, uri: &str, fields: &[(&str, &str)]) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let body = serde_urlencoded::to_string(fields).expect("encode form");
        let req = TestRequest::post()
            .uri(uri)
            .insert_header(ContentType::form_url_encoded())
            .set_payload(body);
        self.send(app, req).await
    }

    pub async fn change_field<S, B>(
        &mut self,
        app: &S,
        page_path: &str,
        field: &str,
        value: &str,
        csrf_token: &str,
    ) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let req = TestRequest::post()
            .uri(&format!("{page_path}/field"))
            .set_json(serde_json::json!({
                "field": field,
                "value": value,
                "csrf_token": csrf_token,
            }));
        self.send(app, req).await
    }
}

// ============================================================================
// PAGE SCRAPING
// ============================================================================

pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has no csrf token")
}

/// Inline error messages in page order, keyed by the field they belong to.
pub fn inline_errors(html: &str) -> Vec<(String, String)> {
    let re = Regex::new(r#"<p class="errorMessage" data-for="([A-Za-z]+)">([^<]*)</p>"#)
        .expect("regex");
    re.captures_iter(html)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}

/// Value attribute of the `<input>` named `name`, as the page would post it.
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r#"<input type="[a-z]+" id="{name}" name="{name}" placeholder="[^"]*" value="([^"]*)""#
    ))
    .expect("regex");
    re.captures(html).map(|c| c[1].to_string())
}
