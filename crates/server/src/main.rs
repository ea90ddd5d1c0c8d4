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
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use late_event_api::{
    ApiError, EvaluationResponse, PolicyConfig, PolicyResponse, SubmissionRequest,
    ValidationResult, evaluate, validate,
};
use late_event_domain::NoticePolicy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Late Event Server - checks whether event registrations gave enough notice
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Business days of notice required for a registration to be on time
    #[arg(long, default_value_t = 14)]
    required_business_days: u32,

    /// Close of business; later submissions count from the next business day
    #[arg(long, default_value = "5:00 pm")]
    business_close: String,

    /// Late fee per hour of event
    #[arg(long, default_value_t = 200.0)]
    hourly_rate: f64,

    /// Days before the event to search for the latest on-time submission
    #[arg(long, default_value_t = 365)]
    search_horizon_days: u16,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            required_business_days: self.required_business_days,
            business_close: self.business_close.clone(),
            hourly_rate: self.hourly_rate,
            search_horizon_days: self.search_horizon_days,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The notice rules every evaluation is measured against.
    policy: NoticePolicy,
}

/// Response for the validate endpoint.
///
/// The submitted form is echoed back unchanged so a rejected form can be
/// re-rendered with the user's original values.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ValidationResponse {
    /// Whether the form may be evaluated.
    valid: bool,
    /// The user-facing error, when invalid.
    error_message: Option<String>,
    /// The offending field, when one can be named.
    field: Option<String>,
    /// The form as submitted.
    form: SubmissionRequest,
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
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.message().to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.message().to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error during evaluation");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for POST `/validate` endpoint.
///
/// Checks a form without evaluating it.
async fn handle_validate(Json(req): Json<SubmissionRequest>) -> Json<ValidationResponse> {
    info!(
        submitted_date = ?req.submitted_date,
        event_date = ?req.event_date,
        "Handling validate request"
    );

    let result: ValidationResult = validate(&req);

    Json(ValidationResponse {
        valid: result.valid,
        error_message: result.error_message,
        field: result.field,
        form: req,
    })
}

/// Handler for POST `/evaluate` endpoint.
///
/// Validates and evaluates a form against the configured policy.
async fn handle_evaluate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> Result<Json<EvaluationResponse>, HttpError> {
    info!(
        submitted_date = ?req.submitted_date,
        event_date = ?req.event_date,
        holiday_count = req.holiday_count,
        "Handling evaluate request"
    );

    let response: EvaluationResponse = evaluate(&req, &app_state.policy)?;

    Ok(Json(response))
}

/// Handler for GET `/policy` endpoint.
async fn handle_get_policy(AxumState(app_state): AxumState<AppState>) -> Json<PolicyResponse> {
    info!("Handling get_policy request");
    Json(PolicyResponse::from(&app_state.policy))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/validate", post(handle_validate))
        .route("/evaluate", post(handle_evaluate))
        .route("/policy", get(handle_get_policy))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; RUST_LOG overrides the verbosity flags
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .init();

    info!("Initializing Late Event Server");

    let policy: NoticePolicy = args.policy_config().build()?;
    info!(
        required_business_days = policy.required_business_days,
        business_close = %policy.business_close,
        hourly_rate = policy.hourly_rate,
        search_horizon_days = policy.search_horizon_days,
        "Loaded notice policy"
    );

    // Build router
    let app: Router = build_router(AppState { policy });

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
