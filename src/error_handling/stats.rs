//! Per-session error statistics.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Counts reported errors by class over one interactive session.
///
/// All classes are initialized to zero on creation. The session is
/// single-threaded, so plain counters suffice.
#[derive(Debug, Clone)]
pub struct SessionStats {
    errors: HashMap<ErrorType, usize>,
}

impl SessionStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        SessionStats { errors }
    }

    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
