use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use hospital::config::AppConfig;
use hospital::gateway::{PersistenceGateway, SqliteGateway};
use log::{info, warn};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("could not read .env: {}", e);
        }
    }
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let gateway = SqliteGateway::open(&config.database)
        .with_context(|| format!("failed to open database {}", config.database))?;
    let gateway: Arc<dyn PersistenceGateway> = Arc::new(gateway);
    let gateway = web::Data::from(gateway);
    info!("Using database {}", config.database);

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Pages: {0}/ {0}/patients {0}/doctors {0}/appointments", url);
    info!("API: {0}/api/patients {0}/api/doctors {0}/api/appointments", url);
    info!("Browser app: {}/app/", url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(gateway.clone())
            .configure(hospital::configure_app)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}", url))?
    .run()
    .await
    .context("server stopped unexpectedly")
}
