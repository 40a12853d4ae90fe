//! Routing table.
//!
//! Maps each level to the ordered list of destinations subscribed under it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::destination::Destination;
use crate::record::Level;

/// Per-logger mapping from level to subscribed destinations.
///
/// One destination may appear under several levels; it is the same shared
/// instance each time. Subscribing the same destination twice under a level
/// makes it receive that level's messages twice.
#[derive(Debug, Default)]
pub struct RoutingTable {
    routes: HashMap<Level, Vec<Arc<dyn Destination>>>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `destination` under each of `levels`.
    pub fn subscribe(&mut self, destination: Arc<dyn Destination>, levels: &[Level]) {
        for level in levels {
            self.routes
                .entry(*level)
                .or_default()
                .push(Arc::clone(&destination));
        }
    }

    /// Destinations for `level`, in subscription order. Empty if none.
    pub fn destinations(&self, level: Level) -> &[Arc<dyn Destination>] {
        self.routes.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Write `line` once to every destination subscribed under `level`.
    pub fn dispatch(&self, level: Level, line: &str) {
        for destination in self.destinations(level) {
            destination.write(line);
        }
    }

    /// Number of subscriptions under `level`.
    pub fn route_count(&self, level: Level) -> usize {
        self.destinations(level).len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.values().all(Vec::is_empty)
    }

    /// Drop every subscription, releasing this table's destination handles.
    pub fn clear(&mut self) {
        self.routes.clear();
    }
}
