//! Client side of the API: a session-aware transport plus the admin dashboard
//! and public site views that keep an in-memory copy of server state.

pub mod api;
pub mod error;
pub mod render;
pub mod session;
pub mod store;

pub use api::ApiClient;
pub use error::ClientError;
pub use session::Session;
pub use store::{ClientStore, Dashboard, Notice, PublicSite};
