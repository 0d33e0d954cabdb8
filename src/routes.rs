//! REST routes: view models over the backend client, errors as `{ "error": ... }` JSON.
//! The binary mounts these with `App::configure(routes::configure)`.

use crate::client::{BackendClient, ClientError, Image};
use crate::models::{PlayerId, StandingEntry, Tournament, TournamentId};
use crate::views::{
    knockout_view, standings_csv, standings_rows, swiss_view, tournament_view, DEFAULT_IMAGE_SVG,
};
use actix_web::{
    get,
    http::header::{AUTHORIZATION, CONTENT_DISPOSITION},
    web::{Data, Path, ServiceConfig},
    HttpRequest, HttpResponse, Responder,
};
use serde::Deserialize;

type AppState = Data<BackendClient>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: player id (e.g. /api/players/{id}/photo)
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Register the API routes. Expects a `Data<BackendClient>` in app data.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_standings_csv)
        .service(api_standings)
        .service(api_bracket)
        .service(api_swiss)
        .service(api_tournament_photo)
        .service(api_get_tournament)
        .service(api_player_photo);
}

/// Authorization header of the incoming request, forwarded to the backends as-is.
fn forwarded_auth(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// 404 for anything missing upstream, 502 for every other backend failure.
pub fn error_response(e: &ClientError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_not_found() {
        return HttpResponse::NotFound().json(body);
    }
    log::error!("{}", e);
    HttpResponse::BadGateway().json(body)
}

/// The photo, or the default image when there is none or it could not be fetched.
fn photo_response(result: Result<Option<Image>, ClientError>) -> HttpResponse {
    let image = result.unwrap_or_else(|e| {
        log::warn!("Photo unavailable, serving default: {}", e);
        None
    });
    match image {
        Some(img) => HttpResponse::Ok()
            .content_type(img.content_type)
            .body(img.bytes),
        None => HttpResponse::Ok()
            .content_type("image/svg+xml")
            .body(DEFAULT_IMAGE_SVG),
    }
}

/// Tournament plus the standings of its Swiss bracket.
async fn fetch_standings(
    client: &BackendClient,
    id: TournamentId,
    auth: Option<&str>,
) -> Result<(Tournament, Vec<StandingEntry>), ClientError> {
    let tournament = client.tournament(id, auth).await?;
    let bracket_id = tournament
        .swiss_bracket_id
        .ok_or(ClientError::NoSwissBracket(id))?;
    let standings = client.swiss_standings(bracket_id, auth).await?;
    Ok((tournament, standings))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Tournament description card.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let auth = forwarded_auth(&req);
    match state.tournament(path.id, auth.as_deref()).await {
        Ok(t) => HttpResponse::Ok().json(tournament_view(&t)),
        Err(e) => error_response(&e),
    }
}

/// Knockout bracket, newest round first.
#[get("/api/tournaments/{id}/bracket")]
async fn api_bracket(state: AppState, req: HttpRequest, path: Path<TournamentPath>) -> HttpResponse {
    let auth = forwarded_auth(&req);
    match state.matches(path.id, auth.as_deref()).await {
        Ok(matches) => HttpResponse::Ok().json(knockout_view(&matches)),
        Err(e) => error_response(&e),
    }
}

/// Swiss rounds with the current round flagged. 404 if the tournament has no Swiss bracket.
#[get("/api/tournaments/{id}/swiss")]
async fn api_swiss(state: AppState, req: HttpRequest, path: Path<TournamentPath>) -> HttpResponse {
    let auth = forwarded_auth(&req);
    let auth = auth.as_deref();
    let (tournament, matches) =
        match tokio::try_join!(state.tournament(path.id, auth), state.matches(path.id, auth)) {
            Ok(pair) => pair,
            Err(e) => return error_response(&e),
        };
    let bracket_id = match tournament.swiss_bracket_id {
        Some(id) => id,
        None => return error_response(&ClientError::NoSwissBracket(path.id)),
    };
    match state.swiss_bracket(bracket_id, auth).await {
        Ok(bracket) => HttpResponse::Ok().json(swiss_view(&matches, &bracket)),
        Err(e) => error_response(&e),
    }
}

/// Ranked Swiss standings.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let auth = forwarded_auth(&req);
    match fetch_standings(&state, path.id, auth.as_deref()).await {
        Ok((_, standings)) => HttpResponse::Ok().json(standings_rows(&standings)),
        Err(e) => error_response(&e),
    }
}

/// Ranked Swiss standings as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let auth = forwarded_auth(&req);
    let (tournament, standings) = match fetch_standings(&state, path.id, auth.as_deref()).await {
        Ok(pair) => pair,
        Err(e) => return error_response(&e),
    };
    match standings_csv(&standings_rows(&standings)) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"standings-{}.csv\"", tournament.id),
            ))
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Player photo, or the default image.
#[get("/api/players/{id}/photo")]
async fn api_player_photo(state: AppState, req: HttpRequest, path: Path<PlayerPath>) -> HttpResponse {
    let auth = forwarded_auth(&req);
    photo_response(state.player_photo(path.id, auth.as_deref()).await)
}

/// Tournament photo, or the default image.
#[get("/api/tournaments/{id}/photo")]
async fn api_tournament_photo(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let auth = forwarded_auth(&req);
    photo_response(state.tournament_photo(path.id, auth.as_deref()).await)
}
