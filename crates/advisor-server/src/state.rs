//! Application State

use std::sync::Arc;

use finance_advisor::{ReportGenerator, TokioDelay};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Report generator shared by every request
    pub generator: Arc<ReportGenerator<TokioDelay>>,
}

impl AppState {
    pub fn new(generator: ReportGenerator<TokioDelay>) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}
