//! In-process fake of the tournament, matchmaking and player backends.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chess_tournament_web::{BackendClient, BackendUrls, Config, ImageCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[allow(dead_code)]
pub struct FakeBackend {
    pub base: String,
    /// Requests served for player 10's photo.
    pub photo_hits: Arc<AtomicUsize>,
    /// Requests served for player 20's photo, which always fails with 500.
    pub failing_photo_hits: Arc<AtomicUsize>,
}

/// Start a fake backend on a free port.
pub fn start_fake_backend() -> FakeBackend {
    let photo_hits = Arc::new(AtomicUsize::new(0));
    let failing_photo_hits = Arc::new(AtomicUsize::new(0));
    let (ok_hits, bad_hits) = (photo_hits.clone(), failing_photo_hits.clone());
    let server = HttpServer::new(move || {
        let ok_hits = ok_hits.clone();
        let bad_hits = bad_hits.clone();
        App::new()
            .route(
                "/tournaments/1",
                web::get().to(|req: HttpRequest| async move {
                    let auth = req
                        .headers()
                        .get("Authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    HttpResponse::Ok().json(serde_json::json!({
                        "id": 1, "name": "Club Championship", "status": "ONGOING",
                        "tournamentType": "SWISS", "swissBracketId": 5,
                        "description": auth
                    }))
                }),
            )
            .route(
                "/tournaments/4",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({
                        "id": 4, "name": "Knockout Cup", "status": "UPCOMING",
                        "tournamentType": "KNOCKOUT", "swissBracketId": null
                    }))
                }),
            )
            .route(
                "/matches/tournament/1",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!([
                        {"id": 1, "player1": {"id": 10, "firstName": "A", "lastName": "X"},
                         "player2": {"id": 11, "firstName": "B", "lastName": "Y"},
                         "winnerId": 10, "swissRoundNumber": 1},
                        {"id": 2, "player1": null, "player2": null, "winnerId": 10,
                         "roundType": {"roundName": "Final"}}
                    ]))
                }),
            )
            .route(
                "/matches/tournament/2",
                web::get().to(|| async { HttpResponse::Ok().body("not json") }),
            )
            .route(
                "/matches/tournament/3",
                web::get().to(|| async { HttpResponse::InternalServerError().finish() }),
            )
            .route(
                "/matches/tournament/4",
                web::get().to(|| async { HttpResponse::Ok().json(serde_json::json!([])) }),
            )
            .route(
                "/swiss-brackets/5",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({"currentRound": 2, "numberOfRounds": 4}))
                }),
            )
            .route(
                "/swiss-brackets/5/standings",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!([
                        {"player": {"id": 10, "firstName": "A", "lastName": "X", "eloRating": 1650.5},
                         "wins": 2, "losses": 0},
                        {"player": {"id": 11, "firstName": "B", "lastName": "Y", "eloRating": 1500.0},
                         "wins": 1, "losses": 1}
                    ]))
                }),
            )
            .route(
                "/players/10/photo",
                web::get().to(move || {
                    let hits = ok_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        HttpResponse::Ok().content_type("image/png").body(vec![137u8, 80, 78, 71])
                    }
                }),
            )
            .route(
                "/players/20/photo",
                web::get().to(move || {
                    let hits = bad_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        HttpResponse::InternalServerError().finish()
                    }
                }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    FakeBackend {
        base: format!("http://{}", addr),
        photo_hits,
        failing_photo_hits,
    }
}

/// Client with all three backends pointed at `base`.
pub fn client_for(base: &str) -> BackendClient {
    let config = Config {
        backends: BackendUrls {
            tournament: base.to_string(),
            matchmaking: base.to_string(),
            player: base.to_string(),
        },
        ..Config::default()
    };
    BackendClient::new(&config, Arc::new(ImageCache::new())).unwrap()
}
