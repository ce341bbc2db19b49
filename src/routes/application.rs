use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json, Response},
};

use crate::dto::application_dto::{JobApplicationForm, ResumeUpload};
use crate::AppState;

/// Collects the multipart form field by field, then hands the raw values to the
/// workflow. Field values are not interpreted here: the service alone decides
/// which shape applies.
#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> crate::error::Result<Response> {
    let mut form = JobApplicationForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to get next multipart field: {}", e);
        crate::error::Error::Multipart(e)
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "wantsJob" => form.wants_job = Some(field.text().await.unwrap_or_default()),
            "hasCertificate" => form.has_certificate = Some(field.text().await.unwrap_or_default()),
            "fullName" => form.full_name = Some(field.text().await.unwrap_or_default()),
            "age" => form.age = Some(field.text().await.unwrap_or_default()),
            "nationalId" => form.national_id = Some(field.text().await.unwrap_or_default()),
            "phone" => form.phone = Some(field.text().await.unwrap_or_default()),
            "email" => form.email = Some(field.text().await.unwrap_or_default()),
            "city" => form.city = Some(field.text().await.unwrap_or_default()),
            "resume" => {
                let filename = field.file_name().unwrap_or("resume.bin").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read resume bytes: {}", e);
                    crate::error::Error::Multipart(e)
                })?;
                form.resume = Some(ResumeUpload {
                    filename,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let result = state.application_service.submit(form)?;
    Ok(Json(result).into_response())
}
