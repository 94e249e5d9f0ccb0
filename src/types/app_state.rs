use std::sync::Arc;

use super::stop::Stop;

/// Shared by every handler. The stop list is loaded once at startup and
/// never written afterwards, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub stops: Arc<Vec<Stop>>,
}

impl AppState {
    pub fn new(stops: Vec<Stop>) -> Self {
        AppState {
            stops: Arc::new(stops),
        }
    }
}
