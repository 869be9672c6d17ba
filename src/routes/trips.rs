use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::AppError,
    models::trip::{Trip, TripPayload},
    services::storage::StoreError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create_trip", post(create_trip))
        .route("/delete_trip/", delete(delete_trip))
        .route("/delete_trip/:id", delete(delete_trip))
        .route("/get_trips/", get(get_trip))
        .route("/get_trips/:id", get(get_trip))
        .route("/trips", get(list_trips))
}

#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    fn message(message: &'static str) -> Self {
        Self {
            message,
            data: None,
        }
    }

    fn with_data(message: &'static str, data: T) -> Self {
        Self {
            message,
            data: Some(data),
        }
    }
}

async fn create_trip(
    State(state): State<AppState>,
    payload: Result<Json<TripPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let Json(payload) = payload.map_err(|err| {
        debug!("rejected trip body: {err}");
        AppError::Validation("request failed".into())
    })?;
    let trip = payload.validate()?;

    let id = state
        .trips
        .create(trip.clone())
        .await
        .map_err(|err| AppError::persistence("could not create trip", err))?;
    debug!("created trip {id}");

    Ok(Json(ApiResponse::with_data(
        "trip has been added",
        trip.with_id(id),
    )))
}

async fn delete_trip(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let raw = require_id(id)?;
    let result = match parse_id(&raw) {
        Ok(id) => state.trips.delete_by_id(id).await,
        Err(err) => Err(err),
    };
    result.map_err(|err| AppError::persistence("could not delete trip plan", err))?;

    Ok(Json(ApiResponse::message("trip deleted successfully")))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Trip>>>, AppError> {
    let trips = state
        .trips
        .find_all()
        .await
        .map_err(|err| AppError::persistence("could not get trip data", err))?;

    Ok(Json(ApiResponse::with_data("trip successfully fetched", trips)))
}

async fn get_trip(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let raw = require_id(id)?;
    debug!("looking up trip {raw}");
    let result = match parse_id(&raw) {
        Ok(id) => state.trips.find_by_id(id).await,
        Err(err) => Err(err),
    };
    let trip = result.map_err(|err| AppError::persistence("could not get trip", err))?;

    Ok(Json(ApiResponse::with_data("trip fetched successfully", trip)))
}

fn require_id(id: Option<Path<String>>) -> Result<String, AppError> {
    match id {
        Some(Path(raw)) if !raw.trim().is_empty() => Ok(raw.trim().to_string()),
        _ => Err(AppError::MissingParameter("id cannot be empty")),
    }
}

fn parse_id(raw: &str) -> Result<i64, StoreError> {
    raw.parse()
        .map_err(|_| StoreError::InvalidId(raw.to_string()))
}
