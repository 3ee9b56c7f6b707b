// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use staybook_api::{
    ApartmentInfo, ApiError, AuthError, AuthenticatedActor, BlockedDatesResponse, BookingInfo,
    CreateApartmentRequest, CreateApartmentResponse, CreateBookingRequest, CreateBookingResponse,
    ListApartmentsResponse, ListBookingsResponse, QuoteRequest, QuoteResponse, Role,
    UpdateAvailabilityRequest, UpdateAvailabilityResponse, UpdateBookingStatusRequest,
    UpdateBookingStatusResponse, authenticate_stub, create_apartment, create_booking,
    get_apartment, get_blocked_dates, get_booking, list_apartment_bookings, list_apartments,
    quote, set_apartment_availability, update_booking_status,
};
use staybook_persistence::Persistence;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Header carrying the caller's actor ID.
const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the caller's role.
const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Staybook Server - HTTP server for apartment availability, quotes and bookings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for apartments and bookings.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// The current day in UTC.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Reads the caller's identity from the request headers.
///
/// Identity is issued elsewhere; this only checks that both headers are
/// present and well-formed.
fn actor_from_headers(headers: &HeaderMap) -> Result<AuthenticatedActor, HttpError> {
    let header_value = |name: &str| -> Result<String, HttpError> {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
            .ok_or_else(|| {
                HttpError::from(ApiError::AuthenticationFailed {
                    reason: format!("Missing or unreadable '{name}' header"),
                })
            })
    };

    let actor_id: String = header_value(ACTOR_ID_HEADER)?;
    let role: Role = header_value(ACTOR_ROLE_HEADER)?
        .parse()
        .map_err(|e: AuthError| HttpError::from(ApiError::from(e)))?;

    authenticate_stub(actor_id, role).map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Handler for GET `/apartments` endpoint.
///
/// Lists the apartments that accept bookings.
async fn handle_list_apartments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListApartmentsResponse>, HttpError> {
    info!("Handling list_apartments request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListApartmentsResponse = list_apartments(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/apartments` endpoint.
///
/// Lists a new apartment. Admin only.
async fn handle_create_apartment(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateApartmentRequest>,
) -> Result<Json<CreateApartmentResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        actor_id = %actor.id,
        role = actor.role.as_str(),
        title = %req.title,
        "Handling create_apartment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateApartmentResponse = create_apartment(&mut persistence, &req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/apartments/{apartment_id}` endpoint.
async fn handle_get_apartment(
    AxumState(app_state): AxumState<AppState>,
    Path(apartment_id): Path<i64>,
) -> Result<Json<ApartmentInfo>, HttpError> {
    info!(apartment_id, "Handling get_apartment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ApartmentInfo = get_apartment(&mut persistence, apartment_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/apartments/{apartment_id}/availability` endpoint.
///
/// Opens or closes an apartment for booking. Admin only.
async fn handle_set_apartment_availability(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(apartment_id): Path<i64>,
    Json(req): Json<UpdateAvailabilityRequest>,
) -> Result<Json<UpdateAvailabilityResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        actor_id = %actor.id,
        apartment_id,
        is_available = req.is_available,
        "Handling set_apartment_availability request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateAvailabilityResponse =
        set_apartment_availability(&mut persistence, apartment_id, &req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/apartments/{apartment_id}/blocked_dates` endpoint.
///
/// Returns every occupied date, for disabling calendar cells.
async fn handle_get_blocked_dates(
    AxumState(app_state): AxumState<AppState>,
    Path(apartment_id): Path<i64>,
) -> Result<Json<BlockedDatesResponse>, HttpError> {
    info!(apartment_id, "Handling get_blocked_dates request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BlockedDatesResponse =
        get_blocked_dates(&mut persistence, apartment_id, today())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/apartments/{apartment_id}/quote` endpoint.
///
/// Prices a stay without booking it.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    Path(apartment_id): Path<i64>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, HttpError> {
    info!(
        apartment_id,
        check_in = %req.check_in,
        check_out = %req.check_out,
        guests = req.guests,
        "Handling quote request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: QuoteResponse = quote(&mut persistence, apartment_id, &req, today())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings` endpoint.
///
/// Creates a pending booking.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), HttpError> {
    info!(
        apartment_id = req.apartment_id,
        check_in = %req.check_in,
        check_out = %req.check_out,
        guests = req.guests,
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateBookingResponse = create_booking(&mut persistence, &req, today())?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
///
/// Returns the booking with the guest's contact details. Admin only.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingInfo>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, booking_id, "Handling get_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingInfo = get_booking(&mut persistence, booking_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/apartments/{apartment_id}/bookings` endpoint.
///
/// Lists every booking of an apartment. Admin only.
async fn handle_list_apartment_bookings(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(apartment_id): Path<i64>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        actor_id = %actor.id,
        apartment_id,
        "Handling list_apartment_bookings request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ListBookingsResponse =
        list_apartment_bookings(&mut persistence, apartment_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/status` endpoint.
///
/// Confirms, cancels or completes a booking. Admin only.
async fn handle_update_booking_status(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<UpdateBookingStatusResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        actor_id = %actor.id,
        booking_id,
        status = %req.status,
        "Handling update_booking_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateBookingStatusResponse =
        update_booking_status(&mut persistence, booking_id, &req, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/apartments",
            get(handle_list_apartments).post(handle_create_apartment),
        )
        .route("/apartments/{apartment_id}", get(handle_get_apartment))
        .route(
            "/apartments/{apartment_id}/availability",
            post(handle_set_apartment_availability),
        )
        .route(
            "/apartments/{apartment_id}/blocked_dates",
            get(handle_get_blocked_dates),
        )
        .route("/apartments/{apartment_id}/quote", post(handle_quote))
        .route(
            "/apartments/{apartment_id}/bookings",
            get(handle_list_apartment_bookings),
        )
        .route("/bookings", post(handle_create_booking))
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route(
            "/bookings/{booking_id}/status",
            post(handle_update_booking_status),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staybook Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
