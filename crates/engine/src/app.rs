//! Application state and composition.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, InventoryCollection},
};
use crate::stores::InventorySession;
use crate::use_cases::InventoryUseCases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    /// Single shared session; handlers take turns through the lock.
    pub session: Mutex<InventorySession>,
}

impl App {
    /// Create a new App backed by the given collection and the system clock.
    pub fn new(collection: Arc<dyn InventoryCollection>) -> Self {
        Self::with_clock(collection, Arc::new(SystemClock::new()))
    }

    /// Create a new App with an explicit clock.
    pub fn with_clock(
        collection: Arc<dyn InventoryCollection>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let inventory = Arc::new(InventoryUseCases::for_collection(collection));

        Self {
            session: Mutex::new(InventorySession::new(inventory, clock)),
        }
    }
}
