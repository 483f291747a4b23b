//! Caller-owned registry of named logger handles
//!
//! Ambient access without ambient state: instead of a process-wide
//! "current logger" static, a host creates a registry, inserts the
//! loggers it wants reachable by name, and passes the registry (or a
//! clone of a handle) to whatever needs it.

use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct LoggerRegistry {
    entries: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logger under `name`, returning the handle it replaced.
    pub fn insert(&self, name: impl Into<String>, logger: Arc<Logger>) -> Option<Arc<Logger>> {
        self.entries.lock().insert(name.into(), logger)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.entries.lock().get(name).cloned()
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.entries.lock().remove(name)
    }

    /// Registered names, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
