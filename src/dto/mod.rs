pub mod application_dto;
pub mod inscription_dto;
pub mod quiz_dto;
pub mod submission_dto;
