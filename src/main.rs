use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use shorter_url::auth::session;
use shorter_url::config::AppConfig;
use shorter_url::forms::store::FormStore;
use shorter_url::forms::submission::{LogSink, SubmissionSink};
use shorter_url::{handlers, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let secret_key = config.session_key();
    let bind_addr = config.bind_addr.clone();
    let cookie_secure = config.cookie_secure;

    let sink: Arc<dyn SubmissionSink> = Arc::new(LogSink);
    let sink = web::Data::from(sink);
    let config = web::Data::new(config);
    let store = web::Data::new(FormStore::new());

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(secret_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(sink.clone())
            .app_data(store.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::home::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
