//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info, warn};

use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/routes", get(list_routes))
        .route("/journey/plan", get(plan_journey))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every station on the network, sorted by name.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let mut stations: Vec<String> = state
        .planner
        .network()
        .stations()
        .map(|s| s.name().to_string())
        .collect();
    stations.sort();

    Json(StationsResponse {
        network_name: state.data.network_name.clone(),
        stations,
    })
}

/// Every route, in the order the data file lists them.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let routes = state.data.routes.iter().map(RouteResult::from_route).collect();

    Json(RoutesResponse {
        network_name: state.data.network_name.clone(),
        routes,
    })
}

/// Plan a journey between two stations.
async fn plan_journey(
    State(state): State<AppState>,
    Query(req): Query<PlanJourneyRequest>,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    let request = req.to_plan_request();
    let result = state.planner.plan(&request, &state.config).await?;

    info!(
        origin = %req.origin,
        destination = %req.destination,
        paths_found = result.paths_found,
        returned = result.itineraries.len(),
        "planned journey"
    );

    let itineraries = result
        .itineraries
        .iter()
        .map(ItineraryResult::from_itinerary)
        .collect();

    Ok(Json(PlanJourneyResponse {
        itineraries,
        paths_found: result.paths_found,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::OriginNotFound(_)
            | PlanError::DestinationNotFound(_)
            | PlanError::NeitherFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::SearchFailed(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
