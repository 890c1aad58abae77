//! Axum route handlers for the synthetic-learner HTTP server.
//!
//! Handlers are thin: they decode, call into the library and encode.  Every
//! failure leaves as `{"error": "..."}` with a status chosen from the
//! underlying [`PersonaError`].

use std::sync::{Arc, RwLock};

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::conversation::{
    ChatRequest, GenerationRequest, SimulationTurn, SimulationTurnRequest, DEMO_TUTOR_PROMPT,
    DEMO_TUTOR_SUMMARY,
};
use crate::persona::archetypes::{archetypes, find_archetype, Archetype};
use crate::persona::compiler::compile_persona_prompt;
use crate::persona::error::PersonaError;
use crate::store::{ProfilePatch, ProfileStore};
use crate::types::dimensions::{dimension_catalog, DimensionDescriptor};
use crate::types::profile::LearnerProfile;
use crate::types::response::{PersonaRequest, PersonaResponse};

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    /// Profile being edited through `/api/profile`.
    pub store: Arc<RwLock<ProfileStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `store` instead of a default profile.
    pub fn with_store(store: ProfileStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// An error response: status plus message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn lock_poisoned() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Profile store lock poisoned".into(),
        }
    }
}

/// HTTP status for a library error.
pub fn status_for(err: &PersonaError) -> StatusCode {
    match err {
        PersonaError::UnknownArchetype(_) => StatusCode::NOT_FOUND,
        PersonaError::MissingProfile
        | PersonaError::InvalidDimension { .. }
        | PersonaError::InvalidRequest(_)
        | PersonaError::Json(_)
        | PersonaError::Yaml(_) => StatusCode::BAD_REQUEST,
        PersonaError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<PersonaError> for ApiError {
    fn from(err: PersonaError) -> Self {
        Self {
            status: status_for(&err),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{}", self.message);
        } else {
            log::debug!("Rejected request ({}): {}", self.status, self.message);
        }
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl IntoResponse for PersonaError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// `Json` whose rejections answer with the `{"error": ...}` shape.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

type ApiResult<T> = Result<Json<T>, ApiError>;

// ============================================================================
// Router
// ============================================================================

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/persona", post(persona_handler))
        .route("/api/archetypes", get(list_archetypes_handler))
        .route("/api/archetypes/:id", get(get_archetype_handler))
        .route("/api/archetypes/:id/profile", get(seed_profile_handler))
        .route("/api/dimensions", get(dimensions_handler))
        .route("/api/tutor", get(tutor_handler))
        .route("/api/chat/request", post(chat_request_handler))
        .route("/api/simulation/turn", post(simulation_turn_handler))
        .route(
            "/api/profile",
            get(get_profile_handler)
                .patch(patch_profile_handler)
                .delete(reset_profile_handler),
        )
        .route("/api/profile/archetype/:id", post(seed_store_handler))
        .route("/api/profile/compile", post(compile_store_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "synthetic-learner",
    }))
}

/// POST /api/persona - compile `{ "profile": LearnerProfile }`.
async fn persona_handler(JsonBody(request): JsonBody<PersonaRequest>) -> ApiResult<PersonaResponse> {
    let profile = request.profile.ok_or(PersonaError::MissingProfile)?;

    let response = compile_persona_prompt(&profile);
    log::info!(
        "Compiled persona for profile {} ({} chars, traits: {})",
        profile.id,
        response.system_prompt.len(),
        !response.prompt_sections.trait_resolutions.is_empty()
    );
    Ok(Json(response))
}

/// GET /api/archetypes
async fn list_archetypes_handler() -> Json<&'static [Archetype]> {
    Json(archetypes())
}

/// GET /api/archetypes/:id
async fn get_archetype_handler(Path(id): Path<String>) -> ApiResult<&'static Archetype> {
    let archetype = find_archetype(&id).ok_or(PersonaError::UnknownArchetype(id))?;
    Ok(Json(archetype))
}

/// GET /api/archetypes/:id/profile - a fresh seeded profile, not stored.
async fn seed_profile_handler(Path(id): Path<String>) -> ApiResult<LearnerProfile> {
    let archetype = find_archetype(&id).ok_or(PersonaError::UnknownArchetype(id))?;
    Ok(Json(archetype.seed_profile()))
}

/// GET /api/dimensions
async fn dimensions_handler() -> Json<Vec<DimensionDescriptor>> {
    Json(dimension_catalog())
}

/// GET /api/tutor
async fn tutor_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "prompt": DEMO_TUTOR_PROMPT,
        "summary": DEMO_TUTOR_SUMMARY,
    }))
}

/// POST /api/chat/request - validate and trim a chat request.
async fn chat_request_handler(JsonBody(request): JsonBody<ChatRequest>) -> ApiResult<GenerationRequest> {
    let original = request.messages.len();
    let generation = request.into_generation()?;
    if generation.messages.len() < original {
        log::debug!(
            "Trimmed chat history from {} to {} messages",
            original,
            generation.messages.len()
        );
    }
    Ok(Json(generation))
}

/// POST /api/simulation/turn - the request for the next simulated turn.
async fn simulation_turn_handler(
    JsonBody(request): JsonBody<SimulationTurnRequest>,
) -> ApiResult<SimulationTurn> {
    let turn = request.prompts.next_turn(&request.history)?;
    log::debug!("Simulation turn {} ({:?})", turn.turn, turn.speaker);
    Ok(Json(turn))
}

// ============================================================================
// Server-held profile
// ============================================================================

/// GET /api/profile - profile under edit plus any cached prompt.
async fn get_profile_handler(State(state): State<AppState>) -> ApiResult<ProfileStore> {
    let store = state.store.read().map_err(|_| ApiError::lock_poisoned())?;
    Ok(Json(store.clone()))
}

/// PATCH /api/profile - partial edit; drops the cached prompt.
async fn patch_profile_handler(
    State(state): State<AppState>,
    JsonBody(patch): JsonBody<ProfilePatch>,
) -> ApiResult<LearnerProfile> {
    let mut store = state.store.write().map_err(|_| ApiError::lock_poisoned())?;
    store.apply(patch);
    Ok(Json(store.profile().clone()))
}

/// DELETE /api/profile - back to defaults.
async fn reset_profile_handler(State(state): State<AppState>) -> ApiResult<LearnerProfile> {
    let mut store = state.store.write().map_err(|_| ApiError::lock_poisoned())?;
    store.reset();
    log::info!("Profile store reset");
    Ok(Json(store.profile().clone()))
}

/// POST /api/profile/archetype/:id
async fn seed_store_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LearnerProfile> {
    let mut store = state.store.write().map_err(|_| ApiError::lock_poisoned())?;
    let profile = store.set_from_archetype(&id)?.clone();
    Ok(Json(profile))
}

/// POST /api/profile/compile
async fn compile_store_handler(State(state): State<AppState>) -> ApiResult<PersonaResponse> {
    let mut store = state.store.write().map_err(|_| ApiError::lock_poisoned())?;
    Ok(Json(store.compile().clone()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::conversation::{SimulationRole, TUTOR_KICKOFF};
    use crate::persona::compiler::PREAMBLE;

    const BODY_LIMIT: usize = 1 << 20;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(AppState::new());
        let (status, json) = send(app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "synthetic-learner");
    }

    #[tokio::test]
    async fn test_persona_compiles_profile() {
        let app = app_router(AppState::new());
        let mut profile = LearnerProfile::new();
        profile.name = Some("Ana".into());
        profile.knowledge_state.misconceptions = "Bigger denominators mean bigger fractions".into();

        let body = serde_json::json!({ "profile": profile });
        let (status, json) = send(app, json_req("POST", "/api/persona", body)).await;
        assert_eq!(status, StatusCode::OK);

        let prompt = json["systemPrompt"].as_str().unwrap();
        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.contains("You are Ana."));
        let sections = json["promptSections"].as_object().unwrap();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections["traitResolutions"], "");
        assert!(sections["knowledgeState"]
            .as_str()
            .unwrap()
            .contains("Bigger denominators mean bigger fractions"));
    }

    #[tokio::test]
    async fn test_persona_requires_profile() {
        let app = app_router(AppState::new());
        let (status, json) = send(app, json_req("POST", "/api/persona", serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Profile is required");
    }

    #[tokio::test]
    async fn test_persona_rejects_unknown_dimension_value() {
        let app = app_router(AppState::new());
        let mut body = serde_json::json!({ "profile": LearnerProfile::new() });
        body["profile"]["motivationAffect"]["selfEfficacy"] = "smug".into();

        let (status, json) = send(app, json_req("POST", "/api/persona", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("smug"));
    }

    #[tokio::test]
    async fn test_malformed_bodies_answer_json_400() {
        let app = app_router(AppState::new());

        let truncated = Request::builder()
            .method("POST")
            .uri("/api/persona")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"profile": {"id": "#))
            .unwrap();
        let (status, json) = send(app.clone(), truncated).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());

        let body = serde_json::json!({"communicationStyle": {"verbosity": "chatty"}});
        let (status, json) = send(app.clone(), json_req("PATCH", "/api/profile", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("chatty"));

        let body = serde_json::json!({
            "systemPrompt": "persona",
            "messages": [{"role": "tutor", "content": "hi"}]
        });
        let (status, json) = send(app.clone(), json_req("POST", "/api/chat/request", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("tutor"));

        let untyped = Request::builder()
            .method("POST")
            .uri("/api/simulation/turn")
            .body(Body::from("{}"))
            .unwrap();
        let (status, json) = send(app, untyped).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_archetype_routes() {
        let app = app_router(AppState::new());

        let (status, json) = send(app.clone(), get_req("/api/archetypes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 7);
        assert_eq!(json[0]["id"], "confident-but-wrong");

        let (status, json) = send(app.clone(), get_req("/api/archetypes/grade-optimizer")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "The Grade Optimizer");

        let (status, json) = send(app.clone(), get_req("/api/archetypes/esl-learner/profile")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "ESL Learner");
        assert_eq!(json["archetypeId"], "esl-learner");
        assert_eq!(json["knowledgeState"]["domain"], "");

        let (status, json) = send(app, get_req("/api/archetypes/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Unknown archetype: nope");
    }

    #[tokio::test]
    async fn test_dimensions_and_tutor() {
        let app = app_router(AppState::new());

        let (status, json) = send(app.clone(), get_req("/api/dimensions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 12);
        assert_eq!(json[0]["key"], "priorKnowledgeLevel");
        assert_eq!(json[0]["options"][2]["value"], "approaching-mastery");

        let (status, json) = send(app, get_req("/api/tutor")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["prompt"], DEMO_TUTOR_PROMPT);
        assert_eq!(json["summary"], DEMO_TUTOR_SUMMARY);
    }

    #[tokio::test]
    async fn test_chat_request_trims_and_validates() {
        let app = app_router(AppState::new());
        let messages: Vec<Value> = (0..55)
            .map(|i| serde_json::json!({"role": if i % 2 == 0 { "user" } else { "assistant" }, "content": format!("m{i}")}))
            .collect();
        let body = serde_json::json!({"systemPrompt": "persona", "messages": messages});

        let (status, json) = send(app.clone(), json_req("POST", "/api/chat/request", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["messages"].as_array().unwrap().len(), 50);
        assert_eq!(json["messages"][0]["content"], "m5");
        assert_eq!(json["maxTokens"], 1024);

        let body = serde_json::json!({"systemPrompt": "", "messages": []});
        let (status, json) = send(app, json_req("POST", "/api/chat/request", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "systemPrompt and messages are required");
    }

    #[tokio::test]
    async fn test_simulation_turn() {
        let app = app_router(AppState::new());

        let body = serde_json::json!({"learnerPrompt": "L", "tutorPrompt": "T"});
        let (status, json) = send(app.clone(), json_req("POST", "/api/simulation/turn", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["turn"], 1);
        assert_eq!(json["speaker"], "tutor");
        assert_eq!(json["request"]["system"], "T");
        assert_eq!(json["request"]["messages"][0]["content"], TUTOR_KICKOFF);

        let body = serde_json::json!({
            "learnerPrompt": "L",
            "tutorPrompt": "T",
            "history": [{"role": "tutor", "content": "Hi! What are you working on?"}]
        });
        let (status, json) = send(app.clone(), json_req("POST", "/api/simulation/turn", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["speaker"], serde_json::to_value(SimulationRole::Learner).unwrap());
        assert_eq!(json["request"]["system"], "L");
        assert_eq!(json["request"]["messages"][0]["role"], "user");

        let body = serde_json::json!({
            "learnerPrompt": "L",
            "tutorPrompt": "T",
            "history": [{"role": "learner", "content": "a"}, {"role": "learner", "content": "b"}]
        });
        let (status, json) = send(app, json_req("POST", "/api/simulation/turn", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("history turn 1 "));
    }

    #[tokio::test]
    async fn test_profile_store_lifecycle() {
        let state = AppState::new();
        let app = app_router(state.clone());

        let (status, json) = send(app.clone(), json_req("POST", "/api/profile/archetype/silent-struggler", Value::Null)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["communicationStyle"]["verbosity"], "terse");

        let (status, json) = send(app.clone(), json_req("POST", "/api/profile/compile", Value::Null)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["promptSections"]["escapeValves"]
            .as_str()
            .unwrap()
            .contains("SHUTDOWN VALVE:"));

        let (_, json) = send(app.clone(), get_req("/api/profile")).await;
        assert!(json["generated"].is_object());

        let patch = serde_json::json!({"knowledgeState": {"domain": "Chemistry"}});
        let (status, json) = send(app.clone(), json_req("PATCH", "/api/profile", patch)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["knowledgeState"]["domain"], "Chemistry");
        assert!(state.store.read().unwrap().generated().is_none());

        let (status, json) = send(app.clone(), json_req("POST", "/api/profile/archetype/unknown", Value::Null)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Unknown archetype: unknown");

        let (status, json) = send(app, json_req("DELETE", "/api/profile", Value::Null)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.get("archetypeId").is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&PersonaError::MissingProfile), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&PersonaError::UnknownArchetype("x".into())), StatusCode::NOT_FOUND);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(status_for(&PersonaError::Io(io)), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
