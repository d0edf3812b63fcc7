//! # Monitor Store
//!
//! Explicit ownership of all monitor state. Each structure id maps to at
//! most one live [`MonitorStructure`]; each anchor location maps to at
//! most one [`PersistedMonitorConfig`]. A member-location index answers
//! the spatial lookups relative bindings make.
//!
//! The store is plain data owned by the caller and passed `&mut` into the
//! lifecycle system and the command sinks. Nothing in this crate holds a
//! global singleton.

use std::collections::HashMap;

use argus_shared::{BlockRegion, IVec3};
use serde::{Deserialize, Serialize};

use crate::structure::{MonitorStructure, PersistedMonitorConfig};

/// Opaque handle the world framework assigns to a formed structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct StructureId(u64);

impl StructureId {
    /// Wraps the framework's raw structure id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw structure id.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Owner of live monitors, persisted projections and the spatial index.
#[derive(Debug, Default)]
pub struct MonitorStore {
    /// Live monitors by structure id.
    monitors: HashMap<StructureId, MonitorStructure>,
    /// Unloaded projections by anchor location.
    persisted: HashMap<IVec3, PersistedMonitorConfig>,
    /// Member block location -> owning structure id.
    locations: HashMap<IVec3, StructureId>,
}

impl MonitorStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a live monitor and indexes every member location of its
    /// region. Replaces any previous monitor under the same id.
    pub fn insert_monitor(
        &mut self,
        id: StructureId,
        monitor: MonitorStructure,
        region: &BlockRegion,
    ) {
        self.monitors.insert(id, monitor);
        for pos in region.blocks() {
            self.locations.insert(pos, id);
        }
    }

    /// Removes a live monitor and its location index entries.
    pub fn remove_monitor(&mut self, id: StructureId) -> Option<MonitorStructure> {
        let removed = self.monitors.remove(&id);
        if removed.is_some() {
            self.locations.retain(|_, owner| *owner != id);
        }
        removed
    }

    /// Live monitor by id.
    #[must_use]
    pub fn monitor(&self, id: StructureId) -> Option<&MonitorStructure> {
        self.monitors.get(&id)
    }

    /// Mutable live monitor by id.
    pub fn monitor_mut(&mut self, id: StructureId) -> Option<&mut MonitorStructure> {
        self.monitors.get_mut(&id)
    }

    /// Id of the monitor structure occupying the given block, if any.
    #[must_use]
    pub fn monitor_at(&self, pos: IVec3) -> Option<StructureId> {
        self.locations.get(&pos).copied()
    }

    /// Attaches a persisted projection to an anchor location. Replaces any
    /// previous projection at the same anchor.
    pub fn attach_persisted(&mut self, anchor: IVec3, config: PersistedMonitorConfig) {
        self.persisted.insert(anchor, config);
    }

    /// Persisted projection at an anchor, if any.
    #[must_use]
    pub fn persisted(&self, anchor: IVec3) -> Option<&PersistedMonitorConfig> {
        self.persisted.get(&anchor)
    }

    /// Detaches and returns the persisted projection at an anchor.
    pub fn take_persisted(&mut self, anchor: IVec3) -> Option<PersistedMonitorConfig> {
        self.persisted.remove(&anchor)
    }

    /// Number of live monitors.
    #[must_use]
    pub fn monitor_count(&self) -> usize {
        self.monitors.len()
    }

    /// Number of unloaded projections awaiting reload.
    #[must_use]
    pub fn persisted_count(&self) -> usize {
        self.persisted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Resolution;
    use argus_shared::Side;

    fn sample_monitor() -> MonitorStructure {
        MonitorStructure::new(IVec3::new(3, 1, 2), Side::Front, Resolution::new(24, 5))
    }

    #[test]
    fn test_insert_indexes_member_locations() {
        let mut store = MonitorStore::new();
        let region = BlockRegion::new(IVec3::new(10, 64, 10), IVec3::new(3, 1, 2));
        store.insert_monitor(StructureId::new(7), sample_monitor(), &region);

        assert_eq!(store.monitor_count(), 1);
        assert_eq!(store.monitor_at(IVec3::new(12, 64, 11)), Some(StructureId::new(7)));
        assert_eq!(store.monitor_at(IVec3::new(13, 64, 11)), None);
    }

    #[test]
    fn test_remove_clears_location_index() {
        let mut store = MonitorStore::new();
        let region = BlockRegion::new(IVec3::new(0, 0, 0), IVec3::new(2, 1, 1));
        store.insert_monitor(StructureId::new(1), sample_monitor(), &region);

        assert!(store.remove_monitor(StructureId::new(1)).is_some());
        assert_eq!(store.monitor_at(IVec3::new(0, 0, 0)), None);
        assert!(store.remove_monitor(StructureId::new(1)).is_none());
    }

    #[test]
    fn test_persisted_attach_take_roundtrip() {
        let mut store = MonitorStore::new();
        let anchor = IVec3::new(5, 5, 5);
        let config = PersistedMonitorConfig::project(&sample_monitor());

        store.attach_persisted(anchor, config);
        assert_eq!(store.persisted_count(), 1);
        assert_eq!(store.persisted(anchor), Some(&config));

        let taken = store.take_persisted(anchor).unwrap();
        assert_eq!(taken, config);
        assert_eq!(store.persisted_count(), 0);
        assert!(store.take_persisted(anchor).is_none());
    }
}
