//! HTTP oracle server.
//!
//! Serves quantum entropy, tarot readings and I Ching readings over HTTP.
//! Provider calls block (HTTP to the QRNG services, ffmpeg for the camera),
//! so every request that needs entropy runs on the blocking thread pool.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;

use oracle_core::{
    DEFAULT_ICHING_SPREAD_ID, DEFAULT_SPREAD_ID, EntropyService, ICHING_SPREADS, OracleError,
    SPREADS, SelectionParams, cast_iching, draw_tarot, iching_spread_by_id, spread_by_id,
};

/// Default and maximum byte counts for `/api/entropy`.
pub const DEFAULT_ENTROPY_COUNT: usize = 50;
pub const MAX_ENTROPY_COUNT: usize = 1024;

const UNAVAILABLE_MESSAGE: &str = "Quantum entropy source unavailable";

/// Shared server state.
struct AppState {
    service: EntropyService,
    selection: SelectionParams,
}

#[derive(Deserialize)]
struct EntropyParams {
    count: Option<usize>,
}

#[derive(Deserialize)]
struct ReadingParams {
    spread: Option<String>,
    intention: Option<String>,
}

type JsonResponse = (StatusCode, Json<serde_json::Value>);

trait JsonWithStatus<T> {
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<T>);
}

impl<T> JsonWithStatus<T> for Json<T> {
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<T>) {
        (status, self)
    }
}

fn error_response(err: &OracleError) -> JsonResponse {
    let status = match err {
        OracleError::UnknownSpread(_) | OracleError::InvalidCount { .. } => StatusCode::BAD_REQUEST,
        e if e.is_recoverable() => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("request failed: {err}");
    } else {
        log::warn!("request failed: {err}");
    }
    Json(serde_json::json!({
        "success": false,
        "error": err.user_message(),
    }))
    .with_status(status)
}

fn join_error_response(err: tokio::task::JoinError) -> JsonResponse {
    log::error!("blocking task failed: {err}");
    Json(serde_json::json!({
        "success": false,
        "error": "internal error",
    }))
    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn handle_entropy(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EntropyParams>,
) -> JsonResponse {
    let count = params
        .count
        .unwrap_or(DEFAULT_ENTROPY_COUNT)
        .clamp(1, MAX_ENTROPY_COUNT);

    let result = tokio::task::spawn_blocking(move || state.service.get_entropy(count)).await;
    match result {
        Ok(Ok(entropy)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "source": entropy.source,
                "type": entropy.kind,
                "data": entropy.values,
            })),
        ),
        Ok(Err(e)) => {
            log::warn!("entropy request failed: {e}");
            Json(serde_json::json!({
                "success": false,
                "error": UNAVAILABLE_MESSAGE,
            }))
            .with_status(StatusCode::SERVICE_UNAVAILABLE)
        }
        Err(e) => join_error_response(e),
    }
}

async fn handle_tarot(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReadingParams>,
) -> JsonResponse {
    let id = params.spread.as_deref().unwrap_or(DEFAULT_SPREAD_ID);
    let spread = match spread_by_id(id) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };

    let result = tokio::task::spawn_blocking(move || {
        draw_tarot(
            &state.service,
            spread,
            params.intention.as_deref(),
            &state.selection,
        )
    })
    .await;

    match result {
        Ok(Ok(reading)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "markdown": reading.to_markdown(),
                "reading": reading,
            })),
        ),
        Ok(Err(e)) => error_response(&e),
        Err(e) => join_error_response(e),
    }
}

async fn handle_iching(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReadingParams>,
) -> JsonResponse {
    let id = params.spread.as_deref().unwrap_or(DEFAULT_ICHING_SPREAD_ID);
    let spread = match iching_spread_by_id(id) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };

    let result = tokio::task::spawn_blocking(move || {
        cast_iching(&state.service, spread, params.intention.as_deref())
    })
    .await;

    match result {
        Ok(Ok(reading)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "markdown": reading.to_markdown(),
                "reading": reading,
            })),
        ),
        Ok(Err(e)) => error_response(&e),
        Err(e) => join_error_response(e),
    }
}

async fn handle_spreads() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "tarot": SPREADS,
        "iching": ICHING_SPREADS,
    }))
}

async fn handle_health(State(state): State<Arc<AppState>>) -> JsonResponse {
    let result = tokio::task::spawn_blocking(move || state.service.health_report()).await;
    match result {
        Ok(report) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": if report.healthy > 0 { "healthy" } else { "degraded" },
                "providers_healthy": report.healthy,
                "providers_total": report.total,
                "providers": report.providers,
            })),
        ),
        Err(e) => join_error_response(e),
    }
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let tarot_ids: Vec<_> = SPREADS.iter().map(|s| s.id).collect();
    let iching_ids: Vec<_> = ICHING_SPREADS.iter().map(|s| s.id).collect();

    Json(serde_json::json!({
        "name": "Quantum Oracle Server",
        "version": oracle_core::VERSION,
        "providers": state.service.provider_names(),
        "endpoints": {
            "/": "This API index",
            "/api/entropy": {
                "method": "GET",
                "description": "Raw quantum entropy bytes",
                "params": {
                    "count": format!("Number of bytes (1-{MAX_ENTROPY_COUNT}, default: {DEFAULT_ENTROPY_COUNT})"),
                }
            },
            "/api/tarot": {
                "method": "GET",
                "description": "Draw a tarot reading",
                "params": {
                    "spread": format!("Spread id (default: {DEFAULT_SPREAD_ID}). Available: {}", tarot_ids.join(", ")),
                    "intention": "Optional question",
                }
            },
            "/api/iching": {
                "method": "GET",
                "description": "Cast an I Ching reading",
                "params": {
                    "spread": format!("Spread id (default: {DEFAULT_ICHING_SPREAD_ID}). Available: {}", iching_ids.join(", ")),
                    "intention": "Optional question",
                }
            },
            "/spreads": "List tarot and I Ching spreads",
            "/health": "Entropy provider health",
        },
        "examples": {
            "entropy": "/api/entropy?count=32",
            "tarot": "/api/tarot?spread=three-card&intention=What%20should%20I%20focus%20on",
            "iching": "/api/iching?spread=past-future",
        }
    }))
}

/// Build the axum router.
pub fn build_router(service: EntropyService, selection: SelectionParams) -> Router {
    let state = Arc::new(AppState { service, selection });

    Router::new()
        .route("/", get(handle_index))
        .route("/api/entropy", get(handle_entropy))
        .route("/api/tarot", get(handle_tarot))
        .route("/api/iching", get(handle_iching))
        .route("/spreads", get(handle_spreads))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP oracle server until it is shut down.
pub async fn run_server(
    service: EntropyService,
    selection: SelectionParams,
    host: &str,
    port: u16,
) -> std::io::Result<()> {
    let app = build_router(service, selection);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::{EntropyKind, EntropyProvider, ProviderError, ProviderInfo};

    // -----------------------------------------------------------------------
    // Test providers
    // -----------------------------------------------------------------------

    static FIXED_INFO: ProviderInfo = ProviderInfo {
        name: "fixed",
        label: "Fixed Test Bytes",
        description: "repeats one byte",
        physics: "none",
        kind: EntropyKind::Quantum,
    };

    struct FixedProvider(u8);

    impl EntropyProvider for FixedProvider {
        fn info(&self) -> &ProviderInfo {
            &FIXED_INFO
        }
        fn health_check(&self) -> bool {
            true
        }
        fn fetch(&self, count: usize) -> Result<Vec<u8>, ProviderError> {
            Ok(vec![self.0; count])
        }
    }

    fn state_with(providers: Vec<Box<dyn EntropyProvider>>) -> State<Arc<AppState>> {
        State(Arc::new(AppState {
            service: EntropyService::new(providers),
            selection: SelectionParams::default(),
        }))
    }

    fn reading_params(spread: Option<&str>, intention: Option<&str>) -> Query<ReadingParams> {
        Query(ReadingParams {
            spread: spread.map(str::to_string),
            intention: intention.map(str::to_string),
        })
    }

    // -----------------------------------------------------------------------
    // /api/entropy
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn entropy_defaults_to_fifty_bytes() {
        let (status, Json(body)) = handle_entropy(
            state_with(vec![Box::new(FixedProvider(7))]),
            Query(EntropyParams { count: None }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["source"], "Fixed Test Bytes");
        assert_eq!(body["type"], "quantum");
        assert_eq!(body["data"].as_array().unwrap().len(), DEFAULT_ENTROPY_COUNT);
    }

    #[tokio::test]
    async fn entropy_count_is_clamped() {
        let state = state_with(vec![Box::new(FixedProvider(1))]);
        let (_, Json(body)) =
            handle_entropy(state, Query(EntropyParams { count: Some(5000) })).await;
        assert_eq!(body["data"].as_array().unwrap().len(), MAX_ENTROPY_COUNT);

        let state = state_with(vec![Box::new(FixedProvider(1))]);
        let (_, Json(body)) = handle_entropy(state, Query(EntropyParams { count: Some(0) })).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn entropy_unavailable_is_503() {
        let (status, Json(body)) =
            handle_entropy(state_with(Vec::new()), Query(EntropyParams { count: Some(8) })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], UNAVAILABLE_MESSAGE);
    }

    // -----------------------------------------------------------------------
    // Readings
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn tarot_reading_with_intention() {
        let (status, Json(body)) = handle_tarot(
            state_with(vec![Box::new(FixedProvider(0))]),
            reading_params(Some("three-card"), Some("Where next?")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reading"]["cards"].as_array().unwrap().len(), 3);
        assert_eq!(body["reading"]["intention"], "Where next?");
        assert!(
            body["markdown"]
                .as_str()
                .unwrap()
                .starts_with("**Spread:** Three Card")
        );
    }

    #[tokio::test]
    async fn tarot_default_spread_is_celtic_cross() {
        let (_, Json(body)) = handle_tarot(
            state_with(vec![Box::new(FixedProvider(0))]),
            reading_params(None, None),
        )
        .await;
        assert_eq!(body["reading"]["spread_id"], DEFAULT_SPREAD_ID);
        assert_eq!(body["reading"]["cards"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn tarot_unknown_spread_is_400() {
        let (status, Json(body)) = handle_tarot(
            state_with(vec![Box::new(FixedProvider(0))]),
            reading_params(Some("pentagram"), None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn tarot_insufficient_entropy_is_503() {
        // 255 is always rejected, so the draw runs out of bytes.
        let (status, Json(body)) = handle_tarot(
            state_with(vec![Box::new(FixedProvider(255))]),
            reading_params(Some("single"), None),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().unwrap().contains("try again"));
    }

    #[tokio::test]
    async fn iching_reading_defaults_to_single_hexagram() {
        let (status, Json(body)) = handle_iching(
            state_with(vec![Box::new(FixedProvider(0))]),
            reading_params(None, None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let casts = body["reading"]["casts"].as_array().unwrap();
        assert_eq!(casts.len(), 1);
        assert_eq!(casts[0]["hexagram"]["number"], 2);
        assert_eq!(casts[0]["transformed"]["number"], 1);
    }

    #[tokio::test]
    async fn iching_unknown_spread_is_400() {
        let (status, _) = handle_iching(
            state_with(vec![Box::new(FixedProvider(0))]),
            reading_params(Some("celtic-cross"), None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // -----------------------------------------------------------------------
    // Catalogue / health / index
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn spreads_lists_both_catalogues() {
        let Json(body) = handle_spreads().await;
        assert_eq!(body["tarot"].as_array().unwrap().len(), SPREADS.len());
        assert_eq!(body["iching"][0]["id"], "single-hexagram");
    }

    #[tokio::test]
    async fn health_reports_providers() {
        let (status, Json(body)) =
            handle_health(state_with(vec![Box::new(FixedProvider(0))])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["providers"][0]["name"], "fixed");

        let (_, Json(body)) = handle_health(state_with(Vec::new())).await;
        assert_eq!(body["status"], "degraded");
    }

    #[tokio::test]
    async fn index_lists_endpoints() {
        let Json(body) = handle_index(state_with(vec![Box::new(FixedProvider(0))])).await;
        assert_eq!(body["version"], oracle_core::VERSION);
        assert!(body["endpoints"]["/api/tarot"].is_object());
        assert_eq!(body["providers"][0], "fixed");
    }

    #[test]
    fn router_builds() {
        let _ = build_router(EntropyService::new(Vec::new()), SelectionParams::default());
    }
}
