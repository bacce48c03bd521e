//! Application state for the leave engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::LeaveEngine;

/// Shared application state.
///
/// Contains the engine instance shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<LeaveEngine>,
}

impl AppState {
    /// Creates a new application state wrapping the given engine.
    pub fn new(engine: LeaveEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &LeaveEngine {
        &self.engine
    }
}
