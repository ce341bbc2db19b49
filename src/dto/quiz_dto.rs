use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::question::{question_bank, Question};
use crate::models::quiz::{result_message, QuizSession};

/// Client-facing question view; the correct answer never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStateResponse {
    pub session_id: Uuid,
    pub finished: bool,
    pub current_index: usize,
    pub total_questions: usize,
    pub answered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuizStateResponse {
    pub fn from_session(session: &QuizSession) -> Self {
        let (score, discount) = match session.result() {
            Some((score, discount)) => (Some(score), Some(discount)),
            None => (None, None),
        };
        Self {
            session_id: session.id,
            finished: session.is_finished(),
            current_index: session.current_index,
            total_questions: question_bank().len(),
            answered: session.answers.len(),
            question: session.current_question().map(QuestionView::from),
            score,
            discount_percentage: discount,
            message: score.map(|s| result_message(s).to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_id: u32,
    #[validate(length(min = 1, message = "Seleccione una opción"))]
    pub answer: String,
}

/// Raw contact body sent from the discount form. Score and discount are NOT
/// part of this shape: the handler seeds them from the finished session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizContactForm {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Full quiz-contact record as handed to the submission handler.
#[derive(Debug, Clone, Validate)]
pub struct QuizContactPayload {
    #[validate(length(min = 3, message = "Nombre completo es requerido"))]
    pub full_name: String,
    #[validate(email(message = "Correo electrónico no válido"))]
    pub email: String,
    #[validate(length(min = 7, message = "Número de teléfono no válido"))]
    pub phone: String,
    #[validate(range(min = 0, max = 100, message = "Puntaje no válido"))]
    pub score: u32,
    #[validate(range(min = 0, max = 100, message = "Descuento no válido"))]
    pub discount_percentage: u32,
}
