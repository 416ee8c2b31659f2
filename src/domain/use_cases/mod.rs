pub mod auth;
pub mod contacts;
pub mod extractors;
pub mod projects;
pub mod settings;
