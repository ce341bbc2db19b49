use crate::dto::quiz_dto::QuizContactPayload;
use crate::dto::submission_dto::SubmissionResult;
use crate::error::Result;
use crate::models::quiz::discount_for_score;
use crate::services::whatsapp_service;
use crate::utils::validation::check;

const FIX_ERRORS_MESSAGE: &str = "Por favor corrija los errores en el formulario.";
const SUCCESS_MESSAGE: &str = "¡Listo! Tu descuento está asegurado. Te redirigiremos a WhatsApp para que puedas usarlo y finalizar tu inscripción. ¡Felicidades!";
const INCONSISTENT_DISCOUNT: &str = "Descuento inconsistente con el puntaje.";

#[derive(Clone)]
pub struct QuizContactService {
    whatsapp_phone: String,
}

impl QuizContactService {
    pub fn new(whatsapp_phone: String) -> Self {
        Self { whatsapp_phone }
    }

    /// Validates the contact record and builds the claim-discount WhatsApp
    /// redirect. The discount is re-derived from the score: a payload whose
    /// discount does not match its score's tier is rejected, so the value sent
    /// onward is always the one the quiz engine computed.
    pub fn submit(&self, payload: QuizContactPayload) -> Result<SubmissionResult> {
        let mut field_errors = check(&payload);
        if payload.discount_percentage != discount_for_score(payload.score) {
            field_errors
                .entry("discountPercentage".to_string())
                .or_insert_with(|| INCONSISTENT_DISCOUNT.to_string());
        }

        if !field_errors.is_empty() {
            return Ok(SubmissionResult::rejected(FIX_ERRORS_MESSAGE, field_errors));
        }

        tracing::info!(
            full_name = %payload.full_name,
            email = %payload.email,
            phone = %payload.phone,
            score = payload.score,
            discount = payload.discount_percentage,
            "quiz discount claim accepted"
        );

        let text = format!(
            "¡Hola WASP! Gané un descuento en el quiz y quiero reclamarlo para el curso de operador de montacargas.\n\nMis datos son:\nNombre: {}\nCorreo: {}\nTeléfono: {}\nPuntaje: {}%\nDescuento ganado: {}%",
            payload.full_name,
            payload.email,
            payload.phone,
            payload.score,
            payload.discount_percentage
        );
        let link = whatsapp_service::deep_link(&self.whatsapp_phone, &text)?;

        Ok(SubmissionResult::redirect(SUCCESS_MESSAGE, link))
    }
}
