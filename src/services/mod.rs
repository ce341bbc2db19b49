pub mod application_service;
pub mod inscription_service;
pub mod quiz_contact_service;
pub mod quiz_service;
pub mod whatsapp_service;
