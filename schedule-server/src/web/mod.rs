//! Web layer for the platform scheduler.
//!
//! Provides HTTP endpoints for uploading demand, generating schedules and
//! filtering the last result.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
