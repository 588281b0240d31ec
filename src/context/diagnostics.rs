use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::VariableError;

/// Receives every non-fatal error the context decides to report.
pub trait Diagnostics: Send + Sync + fmt::Debug {
    /// Reports a non-fatal error.
    fn warn(&self, error: &VariableError);
}

/// Reports warnings as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, error: &VariableError) {
        tracing::warn!(key = error.key(), kind = error.kind(), "{error}");
    }
}

/// Collects warnings in memory.
///
/// Clones share the same buffer, so one handle can be given to the context
/// while another is kept to inspect what was reported.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    warnings: Arc<Mutex<Vec<VariableError>>>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the warnings reported so far.
    pub fn warnings(&self) -> Vec<VariableError> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Diagnostics for Recorder {
    fn warn(&self, error: &VariableError) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.clone());
    }
}
