pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, inscription_service::InscriptionService,
    quiz_contact_service::QuizContactService, quiz_service::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub inscription_service: InscriptionService,
    pub application_service: ApplicationService,
    pub quiz_service: QuizService,
    pub quiz_contact_service: QuizContactService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();

        let inscription_service = InscriptionService::new(config.whatsapp_phone.clone());
        let application_service = ApplicationService::new();
        let quiz_service = QuizService::new();
        let quiz_contact_service = QuizContactService::new(config.whatsapp_phone.clone());

        Self {
            inscription_service,
            application_service,
            quiz_service,
            quiz_contact_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
