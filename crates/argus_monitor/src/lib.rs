//! # ARGUS Monitor
//!
//! In-world display devices assembled from placed blocks, and the
//! rendering abstraction in-world computers write to them through.
//!
//! ## Architecture
//!
//! ```text
//! scripting call
//!      │
//!      v
//! ┌────────────┐    ┌───────────────┐    ┌──────────────┐
//! │ Validators │───>│ RenderBinding │───>│ CommandSink  │
//! │ (capability│    │ (direct or    │    │ (call-scoped │
//! │  checks)   │    │  relative)    │    │  write cap)  │
//! └────────────┘    └───────────────┘    └──────┬───────┘
//!                                               │ wholesale write
//!                                               v
//! ┌───────────────┐   StructureEvent   ┌──────────────────┐
//! │ MonitorLife-  │<───────────────────│   MonitorStore   │
//! │ cycle (form / │                    │ (live monitors,  │
//! │ unload/reload)│───────────────────>│  projections,    │
//! └───────────────┘   insert/remove    │  spatial index)  │
//!                                      └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. **Single tick, single thread** - every operation here runs
//!    synchronously inside the simulation tick; there are no locks.
//! 2. **Explicit ownership** - all monitor state lives in the
//!    [`MonitorStore`] the caller owns and passes in.
//! 3. **Wholesale writes** - display content is replaced, never patched.
//! 4. **Lossy unload** - geometry and resolution survive an unload;
//!    content never does.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod binding;
pub mod buffer;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod lifecycle;
pub mod methods;
pub mod script;
pub mod sink;
pub mod store;
pub mod structure;
pub mod validators;

pub use binding::{BindingCapability, BindingTarget, RenderBinding};
pub use buffer::TextBuffer;
pub use config::FormationRules;
pub use error::{ConfigError, ExecResult, ExecutionError, ExecutionErrorKind};
pub use events::{
    StructureEvent, StructureEventBus, StructureEventReceiver, StructureEventSender,
};
pub use geometry::MAX_MONITOR_DIMENSION;
pub use lifecycle::{MonitorLifecycle, MONITOR_CANDIDATE_KEY, MONITOR_STRUCTURE_KIND};
pub use methods::{
    ClearGraphicsMethod, ClearMethod, CreateOffScreenBufferMethod, DrawBufferMethod,
    GetRenderBindingMethod, ModuleMethod,
};
pub use script::{ComputerContext, Parameters, ScriptValue};
pub use sink::{GraphicsCommandSink, TextCommandSink};
pub use store::{MonitorStore, StructureId};
pub use structure::{MonitorStructure, PersistedMonitorConfig, Resolution};
