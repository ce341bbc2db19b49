use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::quiz_dto::{AnswerRequest, QuizContactForm, QuizContactPayload, QuizStateResponse};
use crate::AppState;

#[axum::debug_handler]
pub async fn start_quiz(State(state): State<AppState>) -> crate::error::Result<Response> {
    let session = state.quiz_service.create()?;
    Ok((
        StatusCode::CREATED,
        Json(QuizStateResponse::from_session(&session)),
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let session = state.quiz_service.get(id)?;
    Ok(Json(QuizStateResponse::from_session(&session)).into_response())
}

#[axum::debug_handler]
pub async fn save_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let session = state
        .quiz_service
        .record_answer(id, req.question_id, req.answer)?;
    Ok(Json(QuizStateResponse::from_session(&session)).into_response())
}

#[axum::debug_handler]
pub async fn advance_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let session = state.quiz_service.advance(id)?;
    Ok(Json(QuizStateResponse::from_session(&session)).into_response())
}

#[axum::debug_handler]
pub async fn restart_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let session = state.quiz_service.restart(id)?;
    Ok(Json(QuizStateResponse::from_session(&session)).into_response())
}

/// Contact form for claiming the quiz discount. Score and discount are seeded
/// from the finished session, never taken from the client.
#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<QuizContactForm>,
) -> crate::error::Result<Response> {
    let (score, discount) = state.quiz_service.claimable_discount(id)?;

    let payload = QuizContactPayload {
        full_name: form.full_name.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        phone: form.phone.unwrap_or_default(),
        score,
        discount_percentage: discount,
    };
    let result = state.quiz_contact_service.submit(payload)?;
    Ok(Json(result).into_response())
}
