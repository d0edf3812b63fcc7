//! # Monitor Lifecycle
//!
//! Drives the structure state machine:
//!
//! ```text
//! Forming ──(shape accepted)──> Active ──(unload)──> Persisted
//!                                 ^                      │
//!                                 └──────(reload)────────┘
//! ```
//!
//! Formation failures are silent: a candidate region that is not a legal
//! monitor shape simply never becomes one. Notifications for foreign
//! structure kinds are ignored. Every transition mutates the store the
//! caller passes in; the system itself holds only its formation rules.

use argus_shared::BlockRegion;
use argus_shared::IVec3;
use tracing::{debug, info, warn};

use crate::config::FormationRules;
use crate::events::{StructureEvent, StructureEventReceiver};
use crate::geometry::{front_side, is_valid_monitor_shape, monitor_resolution};
use crate::store::{MonitorStore, StructureId};
use crate::structure::{MonitorStructure, PersistedMonitorConfig};

/// Structure-kind tag monitors are registered and notified under.
pub const MONITOR_STRUCTURE_KIND: &str = "argus:monitor";

/// Candidate tag a block must carry to take part in monitor detection.
pub const MONITOR_CANDIDATE_KEY: &str = "argus:monitor";

/// Owner of monitor formation and load/unload transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonitorLifecycle {
    rules: FormationRules,
}

impl MonitorLifecycle {
    /// Creates a lifecycle system with the given formation rules.
    #[must_use]
    pub const fn new(rules: FormationRules) -> Self {
        Self { rules }
    }

    /// The formation rules in effect.
    #[must_use]
    pub const fn rules(&self) -> FormationRules {
        self.rules
    }

    /// Drains every pending notification and applies each in order.
    ///
    /// Runs synchronously on the simulation tick; returns the number of
    /// notifications handled.
    pub fn pump(&self, store: &mut MonitorStore, receiver: &StructureEventReceiver) -> usize {
        let mut handled = 0;
        while let Some(event) = receiver.try_recv() {
            self.apply(store, event);
            handled += 1;
        }
        handled
    }

    /// Applies a single notification.
    pub fn apply(&self, store: &mut MonitorStore, event: StructureEvent) {
        match event {
            StructureEvent::Formed { kind, id, region } => {
                self.on_formed(store, &kind, id, &region);
            }
            StructureEvent::BeforeUnload { kind, id, anchor } => {
                self.on_before_unload(store, &kind, id, anchor);
            }
            StructureEvent::Loaded { kind, id, anchor } => {
                self.on_loaded(store, &kind, id, anchor);
            }
        }
    }

    /// Handles a formation notification.
    ///
    /// Computes the structure extent from the region, rejects illegal
    /// shapes without error, and otherwise inserts a blank monitor with
    /// the derived front side and resolution.
    pub fn on_formed(
        &self,
        store: &mut MonitorStore,
        kind: &str,
        id: StructureId,
        region: &BlockRegion,
    ) {
        if kind != MONITOR_STRUCTURE_KIND {
            return;
        }

        let size = region.size;
        if !is_valid_monitor_shape(size, self.rules.max_dimension) {
            debug!(?size, "monitor candidate rejected: illegal shape");
            return;
        }

        let front = front_side(size);
        let resolution = monitor_resolution(size);
        store.insert_monitor(id, MonitorStructure::new(size, front, resolution), region);
        info!(
            structure = id.raw(),
            ?size,
            chars_per_line = resolution.chars_per_line,
            line_count = resolution.line_count,
            "monitor formed"
        );
    }

    /// Handles an unload notification.
    ///
    /// Projects the live monitor's geometry and resolution (never its
    /// content) onto the anchor location and discards the live structure.
    pub fn on_before_unload(
        &self,
        store: &mut MonitorStore,
        kind: &str,
        id: StructureId,
        anchor: IVec3,
    ) {
        if kind != MONITOR_STRUCTURE_KIND {
            return;
        }

        let Some(monitor) = store.remove_monitor(id) else {
            warn!(structure = id.raw(), "unload notification for unknown monitor");
            return;
        };

        store.attach_persisted(anchor, PersistedMonitorConfig::project(&monitor));
        info!(structure = id.raw(), ?anchor, "monitor unloaded, projection anchored");
    }

    /// Handles a reload notification.
    ///
    /// Restores a blank monitor from the projection stored at the anchor
    /// and removes the projection. The anchor is the structure's minimum
    /// corner, so the member index is rebuilt from anchor plus persisted
    /// size.
    pub fn on_loaded(&self, store: &mut MonitorStore, kind: &str, id: StructureId, anchor: IVec3) {
        if kind != MONITOR_STRUCTURE_KIND {
            return;
        }

        let Some(config) = store.take_persisted(anchor) else {
            warn!(structure = id.raw(), ?anchor, "load notification with no anchored projection");
            return;
        };

        let region = BlockRegion::new(anchor, config.size);
        store.insert_monitor(id, config.restore(), &region);
        info!(structure = id.raw(), ?anchor, "monitor reloaded with blank content");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_shared::IVec3;

    fn formed(kind: &str, id: u64, size: IVec3) -> StructureEvent {
        StructureEvent::Formed {
            kind: kind.to_string(),
            id: StructureId::new(id),
            region: BlockRegion::new(IVec3::ZERO, size),
        }
    }

    #[test]
    fn test_foreign_kind_is_ignored() {
        let lifecycle = MonitorLifecycle::default();
        let mut store = MonitorStore::new();

        lifecycle.apply(&mut store, formed("argus:furnace", 1, IVec3::new(3, 1, 1)));
        assert_eq!(store.monitor_count(), 0);
    }

    #[test]
    fn test_illegal_shape_is_silently_rejected() {
        let lifecycle = MonitorLifecycle::default();
        let mut store = MonitorStore::new();

        lifecycle.apply(
            &mut store,
            formed(MONITOR_STRUCTURE_KIND, 1, IVec3::new(2, 1, 2)),
        );
        assert_eq!(store.monitor_count(), 0);
    }

    #[test]
    fn test_unload_of_unknown_monitor_is_ignored() {
        let lifecycle = MonitorLifecycle::default();
        let mut store = MonitorStore::new();

        lifecycle.apply(
            &mut store,
            StructureEvent::BeforeUnload {
                kind: MONITOR_STRUCTURE_KIND.to_string(),
                id: StructureId::new(9),
                anchor: IVec3::ZERO,
            },
        );
        assert_eq!(store.persisted_count(), 0);
    }

    #[test]
    fn test_load_without_projection_is_ignored() {
        let lifecycle = MonitorLifecycle::default();
        let mut store = MonitorStore::new();

        lifecycle.apply(
            &mut store,
            StructureEvent::Loaded {
                kind: MONITOR_STRUCTURE_KIND.to_string(),
                id: StructureId::new(9),
                anchor: IVec3::ZERO,
            },
        );
        assert_eq!(store.monitor_count(), 0);
    }
}
