use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::question::{find_question, question_bank, Question};

/// One client's quiz run. Lives in the in-memory session store; never shared
/// between clients.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub id: Uuid,
    pub current_index: usize,
    pub answers: HashMap<u32, String>,
    pub phase: QuizPhase,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Finished { score: u32, discount: u32 },
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current_index: 0,
            answers: HashMap::new(),
            phase: QuizPhase::InProgress,
            created_at: Utc::now(),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished { .. })
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        if self.is_finished() {
            return None;
        }
        question_bank().get(self.current_index)
    }

    /// Records or overwrites the answer for a question; last write wins.
    /// Does not advance and does not check correctness.
    pub fn record_answer(&mut self, question_id: u32, answer: String) -> Result<()> {
        if self.is_finished() {
            return Err(Error::BadRequest(
                "El quiz ya terminó; reinícialo para responder de nuevo".to_string(),
            ));
        }
        if find_question(question_id).is_none() {
            return Err(Error::NotFound(format!("Pregunta desconocida: {}", question_id)));
        }
        self.answers.insert(question_id, answer);
        Ok(())
    }

    /// Moves to the next question, or scores the run when the current question is
    /// the last one. Only allowed once the current question has a recorded answer.
    pub fn advance(&mut self) -> Result<()> {
        let question = self.current_question().ok_or_else(|| {
            Error::BadRequest("El quiz ya terminó".to_string())
        })?;
        if !self.answers.contains_key(&question.id) {
            return Err(Error::BadRequest(
                "Responde la pregunta actual antes de continuar".to_string(),
            ));
        }
        if self.current_index + 1 < question_bank().len() {
            self.current_index += 1;
        } else {
            let score = self.compute_score();
            self.phase = QuizPhase::Finished {
                score,
                discount: discount_for_score(score),
            };
        }
        Ok(())
    }

    /// Back to a fresh run: index 0, no answers, no score. Prior state must not leak.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.phase = QuizPhase::InProgress;
    }

    pub fn result(&self) -> Option<(u32, u32)> {
        match self.phase {
            QuizPhase::Finished { score, discount } => Some((score, discount)),
            QuizPhase::InProgress => None,
        }
    }

    fn compute_score(&self) -> u32 {
        let bank = question_bank();
        let correct = bank
            .iter()
            .filter(|q| self.answers.get(&q.id) == Some(&q.correct_answer))
            .count();
        ((correct as f64 / bank.len() as f64) * 100.0).round() as u32
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic score-to-discount tiers.
pub fn discount_for_score(score: u32) -> u32 {
    if score >= 85 {
        15
    } else if score >= 70 {
        10
    } else {
        0
    }
}

pub fn result_message(score: u32) -> &'static str {
    if score >= 85 {
        "¡Increíble! ¡Eres un/a verdadero/a talento! Has ganado un 15% de descuento en tu curso de montacargas WASP. ¡Estás listo/a para el éxito!"
    } else if score >= 70 {
        "¡Felicidades! Has demostrado un gran interés. Has ganado un 10% de descuento en tu curso de montacargas WASP. ¡Aprovecha esta oportunidad para impulsar tu carrera!"
    } else {
        "¡No te desanimes! El mundo de la logística es fascinante y lleno de oportunidades. Vuelve a intentarlo y descubre tu potencial. ¡Estamos aquí para apoyarte en tu camino!"
    }
}
