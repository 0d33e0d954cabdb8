//! Single binary web server: HTML shell from templates/, static from /static, view models via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Backend services: TOURNAMENT_SERVICE_URL, MATCHMAKING_SERVICE_URL, PLAYER_SERVICE_URL.

use actix_files::Files;
use actix_web::{
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use chess_tournament_web::{routes, BackendClient, Config, ImageCache};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    log::info!(
        "Backends: tournament={} matchmaking={} player={}",
        config.backends.tournament,
        config.backends.matchmaking,
        config.backends.player
    );

    let images = Arc::new(ImageCache::new());
    let client = BackendClient::new(&config, images)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let state = Data::new(client);

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .configure(routes::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
