//! Single binary web server: JSON API for team selection editors, fixtures and player metrics.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! ROSTER_CSV (optional) seeds the roster from a `name,squad_number,category` file.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use football_team_web::{
    logic::{radar_points, rank_by_position},
    positions_for_format, positions_for_format_name, roster, service, EventId, EventType,
    FixtureDraft, FixtureId, LogNotifier, MemoryRepository, Notifier, ObjectiveDraft, ObjectiveId,
    ObjectiveStatus, PerformanceCategory, PeriodId, PlayerId, PlayerPick, Repository,
    RepositoryError, SaveBatch, SelectionStore, ServiceError, Slot, TeamFormat, TeamId, TeamScore,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for an open selection editor.
type EditorId = Uuid;

/// Per-editor entry: the event being edited, its in-memory store, and last activity (for auto-cleanup).
struct EditorEntry {
    event_id: EventId,
    event_type: EventType,
    format: TeamFormat,
    number_of_teams: u32,
    store: SelectionStore,
    last_activity: Instant,
}

/// In-memory state: open editors by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<EditorId, EditorEntry>>>;
type Repo = Data<dyn Repository>;
type Notify = Data<dyn Notifier>;

/// Inactivity threshold: editors not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct EditorView<'a> {
    id: EditorId,
    event_id: EventId,
    event_type: EventType,
    format: TeamFormat,
    number_of_teams: u32,
    store: &'a SelectionStore,
}

fn editor_view(id: EditorId, entry: &EditorEntry) -> EditorView<'_> {
    EditorView {
        id,
        event_id: entry.event_id,
        event_type: entry.event_type,
        format: entry.format,
        number_of_teams: entry.number_of_teams,
        store: &entry.store,
    }
}

fn error_json(e: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": e.to_string() })
}

/// Status for a failed storage flow: 400 invalid input, 404 missing row, 503 load, 502 save.
fn service_error_response(e: ServiceError) -> HttpResponse {
    match e {
        ServiceError::Invalid(_) => HttpResponse::BadRequest().json(error_json(e)),
        ServiceError::Load(RepositoryError::NotFound(what)) => {
            HttpResponse::NotFound().json(error_json(format!("No {}", what)))
        }
        ServiceError::Load(_) => HttpResponse::ServiceUnavailable().json(error_json(e)),
        ServiceError::Save(_) => HttpResponse::BadGateway().json(error_json(e)),
    }
}

/// Run storage calls on the blocking pool so they never stall the async workers.
async fn with_repo<T, F>(repo: Repo, work: F) -> Result<T, HttpResponse>
where
    T: Send + 'static,
    F: FnOnce(&dyn Repository) -> T + Send + 'static,
{
    let repo: Arc<dyn Repository> = repo.into_inner();
    tokio::task::spawn_blocking(move || work(repo.as_ref()))
        .await
        .map_err(|e| {
            log::error!("Storage task failed: {}", e);
            HttpResponse::InternalServerError().json(error_json("storage task failed"))
        })
}

#[derive(Deserialize)]
struct CreateEditorBody {
    #[serde(default)]
    event_id: Option<EventId>,
    #[serde(default)]
    event_type: EventType,
    format: TeamFormat,
    #[serde(default = "default_number_of_teams")]
    number_of_teams: u32,
}

fn default_number_of_teams() -> u32 {
    1
}

#[derive(Deserialize)]
struct SetSelectionBody {
    team: TeamId,
    period: PeriodId,
    slot: Slot,
    player: PlayerPick,
    /// Defaults to the slot's label in the editor's format.
    #[serde(default)]
    position: Option<String>,
}

#[derive(Deserialize)]
struct SetCategoryBody {
    team: TeamId,
    period: PeriodId,
    category: PerformanceCategory,
}

#[derive(Deserialize)]
struct SetCaptainBody {
    team: TeamId,
    period: PeriodId,
    /// "unassigned" clears the captain.
    player: PlayerPick,
}

#[derive(Deserialize)]
struct ObjectiveStatusBody {
    status: ObjectiveStatus,
}

#[derive(Deserialize)]
struct LimitQuery {
    #[serde(default = "default_top_positions")]
    limit: usize,
}

fn default_top_positions() -> usize {
    3
}

#[derive(Deserialize)]
struct PeriodBody {
    #[serde(default = "default_period_minutes")]
    duration_minutes: u32,
}

fn default_period_minutes() -> u32 {
    football_team_web::models::DEFAULT_PERIOD_MINUTES
}

#[derive(Deserialize)]
struct CategoryQuery {
    #[serde(default)]
    category: Option<String>,
}

/// Path segment: editor id (e.g. /api/editors/{id})
#[derive(Deserialize)]
struct EditorPath {
    id: EditorId,
}

/// Path segments: editor id and period number.
#[derive(Deserialize)]
struct EditorPeriodPath {
    id: EditorId,
    period: PeriodId,
}

/// Path segments: editor id, team number and period number.
#[derive(Deserialize)]
struct EditorTeamPeriodPath {
    id: EditorId,
    team: TeamId,
    period: PeriodId,
}

#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

#[derive(Deserialize)]
struct FixturePath {
    id: FixtureId,
}

#[derive(Deserialize)]
struct ObjectivePath {
    id: ObjectiveId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-team-web",
    })
}

/// Slot layout for a format string (e.g. 7-a-side). Unknown formats have no slots.
#[get("/api/formats/{format}/positions")]
async fn api_format_positions(path: Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(positions_for_format_name(&path.into_inner()))
}

/// Roster, ordered by name.
#[get("/api/players")]
async fn api_players(repo: Repo) -> HttpResponse {
    match with_repo(repo, |r| r.players()).await {
        Ok(Ok(players)) => HttpResponse::Ok().json(players),
        Ok(Err(e)) => service_error_response(ServiceError::Load(e)),
        Err(resp) => resp,
    }
}

/// Minutes by position, captain/MOTM counts and recent games for one player.
#[get("/api/players/{id}/metrics")]
async fn api_player_metrics(repo: Repo, path: Path<PlayerPath>) -> HttpResponse {
    let player_id = path.id;
    match with_repo(repo, move |r| service::load_player_metrics(r, player_id)).await {
        Ok(Ok(metrics)) => HttpResponse::Ok().json(metrics),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

/// A player's best positions by suitability (?limit=, default 3).
#[get("/api/players/{id}/top-positions")]
async fn api_player_top_positions(repo: Repo, path: Path<PlayerPath>, query: Query<LimitQuery>) -> HttpResponse {
    let (player_id, limit) = (path.id, query.limit);
    match with_repo(repo, move |r| service::load_top_positions(r, player_id, limit)).await {
        Ok(Ok(top)) => {
            let body: Vec<_> = top
                .into_iter()
                .map(|(position, score)| serde_json::json!({ "position": position, "suitability_score": score }))
                .collect();
            HttpResponse::Ok().json(body)
        }
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

/// Radar chart points for one attribute category (e.g. ?category=TECHNICAL).
#[get("/api/players/{id}/radar")]
async fn api_player_radar(repo: Repo, path: Path<PlayerPath>, query: Query<CategoryQuery>) -> HttpResponse {
    let Some(category) = query.into_inner().category else {
        return HttpResponse::BadRequest().json(error_json("category is required"));
    };
    let player_id = path.id;
    match with_repo(repo, move |r| r.attributes(player_id)).await {
        Ok(Ok(attributes)) => HttpResponse::Ok().json(radar_points(&attributes, &category)),
        Ok(Err(e)) => service_error_response(ServiceError::Load(e)),
        Err(resp) => resp,
    }
}

/// A player's objectives, newest first.
#[get("/api/players/{id}/objectives")]
async fn api_player_objectives(repo: Repo, path: Path<PlayerPath>) -> HttpResponse {
    let player_id = path.id;
    match with_repo(repo, move |r| service::load_objectives(r, player_id)).await {
        Ok(Ok(objectives)) => HttpResponse::Ok().json(objectives),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

/// Add an objective for a player. Title and review date are required.
#[post("/api/players/{id}/objectives")]
async fn api_add_objective(repo: Repo, path: Path<PlayerPath>, body: Json<ObjectiveDraft>) -> HttpResponse {
    let (player_id, draft) = (path.id, body.into_inner());
    match with_repo(repo, move |r| service::add_objective(r, player_id, &draft)).await {
        Ok(Ok(objective)) => HttpResponse::Ok().json(objective),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

#[put("/api/objectives/{id}/status")]
async fn api_set_objective_status(
    repo: Repo,
    path: Path<ObjectivePath>,
    body: Json<ObjectiveStatusBody>,
) -> HttpResponse {
    let (id, status) = (path.id, body.status);
    match with_repo(repo, move |r| service::set_objective_status(r, id, status)).await {
        Ok(Ok(objective)) => HttpResponse::Ok().json(objective),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

#[delete("/api/objectives/{id}")]
async fn api_delete_objective(repo: Repo, path: Path<ObjectivePath>) -> HttpResponse {
    let id = path.id;
    match with_repo(repo, move |r| r.delete_objective(id)).await {
        Ok(Ok(())) => HttpResponse::Ok().json(serde_json::json!({ "deleted": id })),
        Ok(Err(e)) => service_error_response(ServiceError::Load(e)),
        Err(resp) => resp,
    }
}

/// Players ranked per position by suitability, optionally for one team category.
#[get("/api/rankings")]
async fn api_rankings(repo: Repo, query: Query<CategoryQuery>) -> HttpResponse {
    let category = query.into_inner().category;
    match with_repo(repo, |r| r.suitability()).await {
        Ok(Ok(rows)) => HttpResponse::Ok().json(rank_by_position(&rows, category.as_deref())),
        Ok(Err(e)) => service_error_response(ServiceError::Load(e)),
        Err(resp) => resp,
    }
}

/// Create or update a fixture. Validation runs before storage; the notification is best-effort.
#[post("/api/fixtures")]
async fn api_save_fixture(repo: Repo, notifier: Notify, body: Json<FixtureDraft>) -> HttpResponse {
    let notifier: Arc<dyn Notifier> = notifier.into_inner();
    let draft = body.into_inner();
    match with_repo(repo, move |r| service::create_fixture(r, notifier.as_ref(), &draft)).await {
        Ok(Ok(fixture)) => HttpResponse::Ok().json(fixture),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

/// Get a fixture with its outcome (once both scores are in) and each team's result.
#[get("/api/fixtures/{id}")]
async fn api_get_fixture(repo: Repo, path: Path<FixturePath>) -> HttpResponse {
    let id = path.id;
    match with_repo(repo, move |r| service::load_fixture_report(r, id)).await {
        Ok(Ok(report)) => HttpResponse::Ok().json(report),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

/// Replace the per-team scores of a fixture and return each team's result.
#[put("/api/fixtures/{id}/scores")]
async fn api_record_scores(repo: Repo, path: Path<FixturePath>, body: Json<Vec<TeamScore>>) -> HttpResponse {
    let (id, scores) = (path.id, body.into_inner());
    match with_repo(repo, move |r| service::record_team_scores(r, id, &scores)).await {
        Ok(Ok(outcomes)) => HttpResponse::Ok().json(outcomes),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

/// Open a selection editor for an event, loading any stored selections.
/// A failed load opens nothing.
#[post("/api/editors")]
async fn api_create_editor(state: AppState, repo: Repo, body: Json<CreateEditorBody>) -> HttpResponse {
    if body.number_of_teams == 0 {
        return HttpResponse::BadRequest().json(error_json("Number of teams must be at least 1"));
    }
    let event_id = body.event_id.unwrap_or_else(Uuid::new_v4);
    let event_type = body.event_type;
    let store = match with_repo(repo, move |r| service::load_selections(r, event_id, event_type)).await {
        Ok(Ok(store)) => store,
        Ok(Err(e)) => return service_error_response(e),
        Err(resp) => return resp,
    };
    let id = Uuid::new_v4();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        EditorEntry {
            event_id,
            event_type,
            format: body.format,
            number_of_teams: body.number_of_teams,
            store,
            last_activity: Instant::now(),
        },
    );
    match g.get(&id) {
        Some(entry) => HttpResponse::Ok().json(editor_view(id, entry)),
        None => HttpResponse::InternalServerError().body("editor vanished"),
    }
}

/// Get an editor by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/editors/{id}")]
async fn api_get_editor(state: AppState, path: Path<EditorPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(editor_view(path.id, entry))
        }
        None => HttpResponse::NotFound().json(error_json("No editor")),
    }
}

/// Put a player in a slot, or free it with player "unassigned".
#[put("/api/editors/{id}/selections")]
async fn api_set_selection(state: AppState, path: Path<EditorPath>, body: Json<SetSelectionBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    if body.team == 0 || body.team > entry.number_of_teams {
        return HttpResponse::BadRequest().json(error_json(format!("No team {}", body.team)));
    }
    let body = body.into_inner();
    let position = body.position.unwrap_or_else(|| {
        let key = body.slot.key();
        positions_for_format(entry.format)
            .iter()
            .find(|s| s.slot_id == key)
            .map_or(key.clone(), |s| s.label.to_string())
    });
    entry
        .store
        .set_selection(body.team, body.period, body.slot, body.player, position);
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Set the performance category of one team/period.
#[put("/api/editors/{id}/categories")]
async fn api_set_category(state: AppState, path: Path<EditorPath>, body: Json<SetCategoryBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    if body.team == 0 || body.team > entry.number_of_teams {
        return HttpResponse::BadRequest().json(error_json(format!("No team {}", body.team)));
    }
    entry
        .store
        .set_performance_category(body.team, body.period, body.category);
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Make a selected player captain of one team/period, or clear it with player "unassigned".
#[put("/api/editors/{id}/captain")]
async fn api_set_captain(state: AppState, path: Path<EditorPath>, body: Json<SetCaptainBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    if !entry.store.set_captain(body.team, body.period, body.player) {
        return HttpResponse::BadRequest().json(error_json(format!(
            "Player is not selected in team {} period {}",
            body.team, body.period
        )));
    }
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Add a period after the last one.
#[post("/api/editors/{id}/periods")]
async fn api_add_period(state: AppState, path: Path<EditorPath>, body: Option<Json<PeriodBody>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    let duration = body
        .as_ref()
        .map(|b| b.duration_minutes)
        .unwrap_or_else(default_period_minutes);
    entry.store.add_period(duration);
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Change a period's length.
#[put("/api/editors/{id}/periods/{period}")]
async fn api_set_period_duration(
    state: AppState,
    path: Path<EditorPeriodPath>,
    body: Json<PeriodBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    if !entry.store.set_period_duration(path.period, body.duration_minutes) {
        return HttpResponse::NotFound().json(error_json(format!("No period {}", path.period)));
    }
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Delete a period for every team.
#[delete("/api/editors/{id}/periods/{period}")]
async fn api_remove_period(state: AppState, path: Path<EditorPeriodPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    entry.store.remove_period(path.period);
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Clear one team's selections for a period.
#[delete("/api/editors/{id}/teams/{team}/periods/{period}")]
async fn api_delete_team_period(state: AppState, path: Path<EditorTeamPeriodPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No editor")),
    };
    entry.last_activity = Instant::now();
    entry.store.delete_period(path.team, path.period);
    HttpResponse::Ok().json(editor_view(path.id, entry))
}

/// Starters of one team/period for the pitch diagram.
#[get("/api/editors/{id}/teams/{team}/periods/{period}/formation")]
async fn api_formation(state: AppState, path: Path<EditorTeamPeriodPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.store.to_formation_view(path.team, path.period, entry.format))
        }
        None => HttpResponse::NotFound().json(error_json("No editor")),
    }
}

/// Save the editor's current selections (full replace for the event).
/// The editor stays open and keeps its state whether or not the write succeeds.
#[post("/api/editors/{id}/save")]
async fn api_save_editor(state: AppState, repo: Repo, path: Path<EditorPath>) -> HttpResponse {
    let batch = {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let entry = match g.get_mut(&path.id) {
            Some(e) => e,
            None => return HttpResponse::NotFound().json(error_json("No editor")),
        };
        entry.last_activity = Instant::now();
        SaveBatch::from_store(entry.event_id, entry.event_type, &entry.store)
    };
    let inserted = batch.inserts.len();
    match with_repo(repo, move |r| service::save_selections(r, &batch)).await {
        Ok(Ok(())) => HttpResponse::Ok().json(serde_json::json!({ "saved": inserted })),
        Ok(Err(e)) => service_error_response(e),
        Err(resp) => resp,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Seed the roster from ROSTER_CSV if set. Problems are logged and the server starts anyway.
fn seed_roster(repo: &MemoryRepository) {
    let Ok(path) = std::env::var("ROSTER_CSV") else {
        return;
    };
    let file = match std::fs::File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("Could not open roster {}: {}", path, e);
            return;
        }
    };
    match roster::parse_roster_csv(file) {
        Ok(players) => {
            let n = players.len();
            for p in players {
                if let Err(e) = repo.add_player(p) {
                    log::warn!("Could not add player: {}", e);
                }
            }
            log::info!("Loaded {} player(s) from {}", n, path);
        }
        Err(e) => log::warn!("Could not parse roster {}: {}", path, e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let memory = MemoryRepository::new();
    seed_roster(&memory);
    let repo: Repo = Data::from(Arc::new(memory) as Arc<dyn Repository>);
    let notifier: Notify = Data::from(Arc::new(LogNotifier) as Arc<dyn Notifier>);
    let state = Data::new(RwLock::new(HashMap::<EditorId, EditorEntry>::new()));

    // Background task: every 30 minutes, remove editors inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive editor(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(repo.clone())
            .app_data(notifier.clone())
            .service(api_health)
            .service(api_format_positions)
            .service(api_players)
            .service(api_player_metrics)
            .service(api_player_top_positions)
            .service(api_player_radar)
            .service(api_player_objectives)
            .service(api_add_objective)
            .service(api_set_objective_status)
            .service(api_delete_objective)
            .service(api_rankings)
            .service(api_save_fixture)
            .service(api_get_fixture)
            .service(api_record_scores)
            .service(api_create_editor)
            .service(api_get_editor)
            .service(api_set_selection)
            .service(api_set_category)
            .service(api_set_captain)
            .service(api_add_period)
            .service(api_set_period_duration)
            .service(api_remove_period)
            .service(api_delete_team_period)
            .service(api_formation)
            .service(api_save_editor)
    })
    .bind(bind)?
    .run()
    .await
}
