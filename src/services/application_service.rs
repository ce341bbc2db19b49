use std::collections::HashMap;

use crate::dto::application_dto::{InterestedApplicant, JobApplicationForm, ResumeUpload};
use crate::dto::submission_dto::{SubmissionResult, YesNo};
use crate::error::{Error, Result};
use crate::utils::validation::check;

pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

const FIX_ERRORS_MESSAGE: &str = "Por favor corrija los errores en el formulario.";
const RESUME_REQUIRED_MESSAGE: &str = "Por favor, sube tu hoja de vida.";
const RESUME_REQUIRED_FIELD: &str = "Hoja de vida es requerida.";
const RESUME_TOO_LARGE: &str = "El archivo no debe exceder 5MB.";
const RESUME_BAD_TYPE: &str = "Solo se aceptan archivos PDF, DOC, DOCX.";
const DISINTERESTED_MESSAGE: &str = "¡Entendido! Si en algún momento cambias de opinión o quieres explorar el mundo de los montacargas, ¡nuestro curso está aquí para ti! Te invitamos a conocer más.";
const THANK_YOU_MESSAGE: &str = "¡Gracias por tu interés! Hemos recibido tu información y hoja de vida. Nuestro equipo de WASP se pondrá en contacto contigo si tu perfil coincide con las vacantes disponibles. ¡Te deseamos mucho éxito!";

#[derive(Clone)]
pub struct ApplicationService;

impl ApplicationService {
    pub fn new() -> Self {
        Self
    }

    /// Job-application workflow. `wants_job` is read first and alone decides
    /// the shape: "No" is a valid terminal outcome that bypasses the schema
    /// entirely; "Sí" makes every other field mandatory and collects every
    /// failing field at once.
    pub fn submit(&self, form: JobApplicationForm) -> Result<SubmissionResult> {
        let wants_job = form
            .wants_job
            .as_deref()
            .and_then(YesNo::parse)
            .ok_or_else(|| Error::BadRequest("El campo wantsJob es requerido".to_string()))?;

        if wants_job == YesNo::No {
            return Ok(SubmissionResult::skip(DISINTERESTED_MESSAGE));
        }

        // A fully absent or empty file cannot flow through the schema's file
        // checks, so it fails first with its own message.
        let resume = match form.resume {
            Some(ref resume) if resume.size() > 0 => resume,
            _ => {
                let mut field_errors = HashMap::new();
                field_errors.insert("resume".to_string(), RESUME_REQUIRED_FIELD.to_string());
                return Ok(SubmissionResult::rejected(RESUME_REQUIRED_MESSAGE, field_errors));
            }
        };

        let mut coercion_errors: HashMap<String, String> = HashMap::new();

        let has_certificate = match form.has_certificate.as_deref().and_then(YesNo::parse) {
            Some(choice) => choice,
            None => {
                coercion_errors
                    .insert("hasCertificate".to_string(), "Seleccione una opción".to_string());
                YesNo::No
            }
        };
        let age = match form.age.as_deref().and_then(|s| s.trim().parse().ok()) {
            Some(age) => age,
            None => {
                coercion_errors.insert("age".to_string(), "Edad no válida".to_string());
                0
            }
        };

        let applicant = InterestedApplicant {
            has_certificate,
            full_name: form.full_name.unwrap_or_default(),
            age,
            national_id: form.national_id.unwrap_or_default(),
            phone: form.phone.unwrap_or_default(),
            email: form.email.unwrap_or_default(),
            city: form.city.unwrap_or_default(),
        };

        let mut field_errors = check(&applicant);
        field_errors.extend(coercion_errors);
        if let Some(resume_error) = check_resume(resume) {
            field_errors.insert("resume".to_string(), resume_error);
        }

        if !field_errors.is_empty() {
            return Ok(SubmissionResult::rejected(FIX_ERRORS_MESSAGE, field_errors));
        }

        // The binary content is read and discarded; only metadata is logged.
        tracing::info!(
            full_name = %applicant.full_name,
            age = applicant.age,
            national_id = %applicant.national_id,
            phone = %applicant.phone,
            email = %applicant.email,
            city = %applicant.city,
            has_certificate = %applicant.has_certificate,
            resume_filename = %resume.filename,
            resume_size = resume.size(),
            "job application accepted"
        );

        Ok(SubmissionResult::accepted(THANK_YOU_MESSAGE))
    }
}

impl Default for ApplicationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Size and content type are independent predicates; when both fail, both
/// messages are reported instead of just the first.
fn check_resume(resume: &ResumeUpload) -> Option<String> {
    let mut problems = Vec::new();
    if resume.size() > MAX_RESUME_BYTES {
        problems.push(RESUME_TOO_LARGE);
    }
    if !ACCEPTED_RESUME_TYPES.contains(&resume.content_type.as_str()) {
        problems.push(RESUME_BAD_TYPE);
    }
    if problems.is_empty() {
        None
    } else {
        Some(problems.join(" "))
    }
}
