//! Application state shared across all route handlers.
//!
//! Everything here is immutable after startup, so handlers share it through
//! `Arc` clones without locking.

use std::sync::Arc;
use std::time::Instant;

use smelter_chat::QuestionInterpreter;
use smelter_core::config::SmelterConfig;
use smelter_store::BatchStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<SmelterConfig>,
    /// Batch records, built once at startup.
    pub store: Arc<BatchStore>,
    /// Question interpreter reading from `store`.
    pub interpreter: Arc<QuestionInterpreter>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over an already-built store.
    pub fn new(config: SmelterConfig, store: Arc<BatchStore>) -> Self {
        let interpreter = QuestionInterpreter::new(Arc::clone(&store), &config.interpreter)
            .with_max_question_chars(config.api.max_question_chars);
        Self {
            config: Arc::new(config),
            store,
            interpreter: Arc::new(interpreter),
            start_time: Instant::now(),
        }
    }
}
