pub mod application;
pub mod health;
pub mod inscription;
pub mod quiz;
