pub mod auth;
pub mod contacts;
pub mod home;
pub mod json_error;
pub mod projects;
pub mod settings;
pub mod system;
