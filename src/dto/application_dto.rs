use bytes::Bytes;
use validator::Validate;

use crate::dto::submission_dto::YesNo;

/// Raw multipart job-application form as collected field by field. `wants_job`
/// is the discriminant: when it is "No" nothing else is ever inspected.
#[derive(Debug, Clone, Default)]
pub struct JobApplicationForm {
    pub wants_job: Option<String>,
    pub has_certificate: Option<String>,
    pub full_name: Option<String>,
    pub age: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub resume: Option<ResumeUpload>,
}

/// Uploaded resume. Bytes are held in memory, checked and discarded; the
/// binary content is never persisted or forwarded.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl ResumeUpload {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// The `wants_job = Sí` shape: every field is mandatory. Selected by the
/// discriminant, with its own required-field set, instead of one flat
/// optional-everything schema.
#[derive(Debug, Clone, Validate)]
pub struct InterestedApplicant {
    pub has_certificate: YesNo,
    #[validate(length(min = 3, message = "Nombre completo es requerido"))]
    pub full_name: String,
    #[validate(range(min = 18, max = 99, message = "Debe ser mayor de edad"))]
    pub age: i64,
    #[validate(length(min = 5, message = "Número de cédula es requerido"))]
    pub national_id: String,
    #[validate(length(min = 7, message = "Número de teléfono no válido"))]
    pub phone: String,
    #[validate(email(message = "Correo electrónico no válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Ciudad de residencia es requerida"))]
    pub city: String,
}
