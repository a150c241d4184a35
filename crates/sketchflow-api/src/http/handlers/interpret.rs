//! Interpretation endpoint: natural-language message in, diagram actions out.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::Instrument;

use sketchflow_types::diagram::InterpretationRequest;
use sketchflow_types::interpret::InterpretationOutcome;

use crate::http::error::{AppError, TEXT_PLAIN};
use crate::state::AppState;

/// POST /api/ai/interpret - Run one message through the pipeline.
///
/// Dropping the connection drops this future, and the outbound model
/// request with it.
pub async fn interpret(
    State(state): State<AppState>,
    payload: Result<Json<InterpretationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("interpret_request", %request_id);

    let outcome = state
        .interpret_service
        .interpret(&request.message)
        .instrument(span)
        .await?;

    Ok(outcome_response(outcome))
}

/// Map an outcome to its HTTP response.
///
/// - `Success` → 200 with the structured value as JSON
/// - `RateLimited` → 429 with the message text
/// - `RawFallback` → 200 with the raw completion, for the client to handle
pub fn outcome_response(outcome: InterpretationOutcome) -> Response {
    match outcome {
        InterpretationOutcome::Success(value) => (StatusCode::OK, Json(value)).into_response(),
        InterpretationOutcome::RateLimited(message) => (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            message,
        )
            .into_response(),
        InterpretationOutcome::RawFallback(text) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], text).into_response()
        }
    }
}
