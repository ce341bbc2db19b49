use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};

use crate::dto::inscription_dto::InscriptionForm;
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_inscription(
    State(state): State<AppState>,
    Json(form): Json<InscriptionForm>,
) -> crate::error::Result<Response> {
    let result = state.inscription_service.submit(form)?;
    Ok(Json(result).into_response())
}
