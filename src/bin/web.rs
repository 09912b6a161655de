//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, SESSION_TIMEOUT_HOURS.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use team_randomizer_web::{
    export_teams, generate_teams, generate_teams_with_seed, Session, SessionError, SessionId,
    DEFAULT_TEAM_SIZE,
};

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: Session,
    last_activity: Instant,
}

/// In-memory state: many sessions by ID. Idle entries are removed by the cleanup task.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// How often the cleanup task looks for idle sessions.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateSessionBody {
    #[serde(default = "default_team_size")]
    team_size: usize,
    #[serde(default)]
    entry_fee: f64,
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct TeamSizeBody {
    team_size: usize,
}

#[derive(Deserialize)]
struct EntryFeeBody {
    entry_fee: f64,
}

#[derive(Deserialize)]
struct GenerateTeamsBody {
    /// Optional seed for a reproducible draw.
    #[serde(default)]
    seed: Option<u64>,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and roster index (e.g. /api/sessions/{id}/players/{index})
#[derive(Deserialize)]
struct SessionPlayerPath {
    id: SessionId,
    index: usize,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" }))
}

fn bad_request(e: SessionError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `action` against one session, refreshing its activity time. Responds with the whole session.
fn update_session<F>(state: &AppState, id: SessionId, action: F) -> HttpResponse
where
    F: FnOnce(&mut Session) -> Result<(), SessionError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match action(&mut entry.session) {
        Ok(()) => HttpResponse::Ok().json(&entry.session),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-randomizer-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new session (returns it with id; client stores id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Option<Json<CreateSessionBody>>) -> HttpResponse {
    let (team_size, entry_fee) = body
        .as_ref()
        .map(|b| (b.team_size, b.entry_fee))
        .unwrap_or((default_team_size(), 0.0));
    let session = match Session::with_settings(team_size, entry_fee) {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    log::info!("Created session {}", session.id);
    let response = HttpResponse::Ok().json(&session);
    g.insert(
        session.id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    update_session(&state, path.id, |_| Ok(()))
}

/// Add a player to the end of the roster.
#[post("/api/sessions/{id}/players")]
async fn api_add_player(state: AppState, path: Path<SessionPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    update_session(&state, path.id, |s| s.add_player(body.name.as_str()))
}

/// Remove the player at a roster index.
#[delete("/api/sessions/{id}/players/{index}")]
async fn api_remove_player(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    let index = path.index;
    update_session(&state, path.id, |s| s.remove_player(index).map(|_| ()))
}

/// Remove all players.
#[delete("/api/sessions/{id}/players")]
async fn api_clear_players(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    update_session(&state, path.id, |s| {
        s.clear_players();
        Ok(())
    })
}

/// Update players per team.
#[put("/api/sessions/{id}/team-size")]
async fn api_set_team_size(state: AppState, path: Path<SessionPath>, body: Json<TeamSizeBody>) -> HttpResponse {
    update_session(&state, path.id, |s| s.set_team_size(body.team_size))
}

/// Update the per-player entry fee.
#[put("/api/sessions/{id}/entry-fee")]
async fn api_set_entry_fee(state: AppState, path: Path<SessionPath>, body: Json<EntryFeeBody>) -> HttpResponse {
    update_session(&state, path.id, |s| s.set_entry_fee(body.entry_fee))
}

/// Shuffle the roster into teams and recompute payouts.
#[post("/api/sessions/{id}/teams/generate")]
async fn api_generate_teams(
    state: AppState,
    path: Path<SessionPath>,
    body: Option<Json<GenerateTeamsBody>>,
) -> HttpResponse {
    let seed = body.and_then(|b| b.seed);
    update_session(&state, path.id, |s| match seed {
        Some(seed) => generate_teams_with_seed(s, seed),
        None => generate_teams(s),
    })
}

/// Current teams as clipboard text: one team per line, members joined by " & ".
#[get("/api/sessions/{id}/teams/export")]
async fn api_export_teams(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match export_teams(&entry.session) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_session_timeout_hours() -> u64 {
    12
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let timeout_hours: u64 = std::env::var("SESSION_TIMEOUT_HOURS")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(default_session_timeout_hours);
    let inactivity_timeout = Duration::from_secs(timeout_hours * 3600);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: periodically remove sessions with no recent activity
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive session(s) (no activity for {}h)",
                    removed,
                    timeout_hours
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_clear_players)
            .service(api_set_team_size)
            .service(api_set_entry_fee)
            .service(api_generate_teams)
            .service(api_export_teams)
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
