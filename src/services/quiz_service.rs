use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::quiz::QuizSession;

/// In-memory quiz session store. Each session belongs to one client and is
/// mutated only through short single-writer critical sections.
#[derive(Clone, Default)]
pub struct QuizService {
    sessions: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
}

impl QuizService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Result<QuizSession> {
        let session = QuizSession::new();
        self.write()?.insert(session.id, session.clone());
        tracing::info!(session_id = %session.id, "quiz session created");
        Ok(session)
    }

    pub fn get(&self, id: Uuid) -> Result<QuizSession> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Sesión de quiz desconocida: {}", id)))
    }

    pub fn record_answer(&self, id: Uuid, question_id: u32, answer: String) -> Result<QuizSession> {
        self.mutate(id, |session| session.record_answer(question_id, answer))
    }

    pub fn advance(&self, id: Uuid) -> Result<QuizSession> {
        let session = self.mutate(id, QuizSession::advance)?;
        if let Some((score, discount)) = session.result() {
            tracing::info!(session_id = %id, score, discount, "quiz finished");
        }
        Ok(session)
    }

    pub fn restart(&self, id: Uuid) -> Result<QuizSession> {
        self.mutate(id, |session| {
            session.restart();
            Ok(())
        })
    }

    /// Score and discount for a finished session with a discount to claim.
    /// This is the only source the contact workflow accepts them from.
    pub fn claimable_discount(&self, id: Uuid) -> Result<(u32, u32)> {
        let session = self.get(id)?;
        match session.result() {
            Some((score, discount)) if discount > 0 => Ok((score, discount)),
            Some(_) => Err(Error::BadRequest(
                "El puntaje no alcanzó un descuento".to_string(),
            )),
            None => Err(Error::BadRequest("El quiz aún no ha terminado".to_string())),
        }
    }

    fn mutate<F>(&self, id: Uuid, op: F) -> Result<QuizSession>
    where
        F: FnOnce(&mut QuizSession) -> Result<()>,
    {
        let mut sessions = self.write()?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound(format!("Sesión de quiz desconocida: {}", id)))?;
        op(session)?;
        Ok(session.clone())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, QuizSession>>> {
        self.sessions
            .read()
            .map_err(|_| Error::Internal("quiz session lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, QuizSession>>> {
        self.sessions
            .write()
            .map_err(|_| Error::Internal("quiz session lock poisoned".to_string()))
    }
}
