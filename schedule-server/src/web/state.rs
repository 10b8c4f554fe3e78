//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::session::Session;

/// Shared application state.
///
/// There is one scheduling session; requests take turns on it.
#[derive(Clone)]
pub struct AppState {
    /// The scheduling session
    pub session: Arc<Mutex<Session>>,

    /// Pause before each scheduling run
    pub processing_delay: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(session: Session, processing_delay: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            processing_delay,
        }
    }
}
