//! # Structure Notifications
//!
//! Kind-tagged lifecycle notifications the world framework emits when
//! multi-block structures form, unload or reload. Delivered through a
//! bounded channel; the lifecycle system drains it synchronously once per
//! tick.
//!
//! Events for structure kinds this subsystem does not own flow through the
//! same bus and are ignored by the consumer, never failed.

use argus_shared::{BlockRegion, IVec3};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::store::StructureId;

/// A structure lifecycle notification.
///
/// `kind` is the structure-kind tag the detection recipe registered;
/// consumers check it before acting.
#[derive(Clone, Debug)]
pub enum StructureEvent {
    /// A contiguous candidate region coalesced into a structure.
    Formed {
        /// Structure-kind tag.
        kind: String,
        /// Handle of the new structure entity.
        id: StructureId,
        /// The blocks the structure occupies.
        region: BlockRegion,
    },

    /// A structure is about to leave active simulation.
    BeforeUnload {
        /// Structure-kind tag.
        kind: String,
        /// Handle of the departing structure entity.
        id: StructureId,
        /// Anchor location that stays addressable while unloaded.
        anchor: IVec3,
    },

    /// A structure re-entered active simulation at its anchor.
    Loaded {
        /// Structure-kind tag.
        kind: String,
        /// Handle of the fresh structure entity.
        id: StructureId,
        /// Anchor location the projection was stored at.
        anchor: IVec3,
    },
}

/// Bus carrying structure notifications into the lifecycle system.
///
/// Bounded so a stalled consumer cannot grow memory without limit.
pub struct StructureEventBus {
    /// Sender end - held by the world framework adapter.
    sender: Sender<StructureEvent>,
    /// Receiver end - held by the lifecycle system.
    receiver: Receiver<StructureEvent>,
}

impl StructureEventBus {
    /// Creates a new bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum notifications in flight. 256 is plenty for
    ///   one tick of structure churn.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> StructureEventSender {
        StructureEventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> StructureEventReceiver {
        StructureEventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

/// Handle for posting notifications.
#[derive(Clone)]
pub struct StructureEventSender {
    sender: Sender<StructureEvent>,
}

impl StructureEventSender {
    /// Posts a notification (non-blocking).
    ///
    /// Returns `false` if the channel is full or the receiver is gone; the
    /// notification is dropped.
    #[inline]
    pub fn send(&self, event: StructureEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for draining notifications.
#[derive(Clone)]
pub struct StructureEventReceiver {
    receiver: Receiver<StructureEvent>,
}

impl StructureEventReceiver {
    /// Receives one notification (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<StructureEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending notifications.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}
