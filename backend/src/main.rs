mod codes;
mod config;
mod db;
mod error;
mod services;

use crate::config::ServerConfig;
use crate::db::Db;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded admin UI. Unknown paths get `index.html`.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// API scopes plus the embedded UI, so the page and the API share one origin
/// and the UI can call the API with relative paths.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(services::students::configure_routes())
        .service(services::teachers::configure_routes())
        .service(services::subjects::configure_routes())
        .default_service(web::route().to(serve_embedded));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    let db = Db::open(&config.database).map_err(std::io::Error::other)?;

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Não foi possível abrir o navegador: {}", err);
            }
        });
    }

    info!("Servidor rodando em {}", url);

    let db = web::Data::new(db);
    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .app_data(error::json_config())
            .configure(routes)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
