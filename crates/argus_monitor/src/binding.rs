//! # Render Bindings
//!
//! A binding is the logical device reference scripting programs hold on
//! to. It resolves into a concrete command sink once per call: direct
//! bindings wrap a fixed structure handle, relative bindings look the
//! device up from the caller's current location every time. Capability is
//! a closed enum checked by the validators, not a runtime tag set.

use argus_shared::{Direction, Extent2};

use crate::error::{ExecResult, ExecutionError, ExecutionErrorKind};
use crate::script::ComputerContext;
use crate::sink::{GraphicsCommandSink, TextCommandSink};
use crate::store::{MonitorStore, StructureId};

/// Mode-string prefix negotiated by text bindings.
const TEXT_MODE_PREFIX: &str = "text:";

/// Mode-string prefix negotiated by graphics bindings.
const GRAPHICS_MODE_PREFIX: &str = "graphics:";

/// Capability a binding advertises to the validators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingCapability {
    /// May resolve text command sinks.
    TextRenderBinding,
    /// May resolve graphics command sinks.
    GraphicsRenderBinding,
}

impl BindingCapability {
    /// The capability name as error messages print it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TextRenderBinding => "TEXT_RENDER_BINDING",
            Self::GraphicsRenderBinding => "GRAPHICS_RENDER_BINDING",
        }
    }
}

/// How a binding finds its device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingTarget {
    /// A fixed structure handle.
    Direct {
        /// The bound structure.
        id: StructureId,
        /// Whether writes through this device cost no wall time.
        instant_rendering: bool,
    },
    /// A device looked up per call, one block away from the caller.
    ///
    /// Spatially resolved devices are never instant.
    Relative {
        /// Which neighbor of the caller to address.
        direction: Direction,
        /// Resolution the binding was configured to require.
        resolution: Extent2,
    },
}

/// A logical reference to a renderable device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderBinding {
    capability: BindingCapability,
    mode: String,
    target: BindingTarget,
}

impl RenderBinding {
    /// Text binding wrapping a fixed structure handle.
    #[must_use]
    pub fn direct_text(id: StructureId, instant_rendering: bool) -> Self {
        Self {
            capability: BindingCapability::TextRenderBinding,
            mode: TEXT_MODE_PREFIX.to_string(),
            target: BindingTarget::Direct {
                id,
                instant_rendering,
            },
        }
    }

    /// Text binding addressing the caller's neighbor in `direction`.
    #[must_use]
    pub fn relative_text(direction: Direction, resolution: Extent2) -> Self {
        Self {
            capability: BindingCapability::TextRenderBinding,
            mode: TEXT_MODE_PREFIX.to_string(),
            target: BindingTarget::Relative {
                direction,
                resolution,
            },
        }
    }

    /// Graphics binding wrapping a fixed structure handle.
    #[must_use]
    pub fn direct_graphics(id: StructureId, instant_rendering: bool) -> Self {
        Self {
            capability: BindingCapability::GraphicsRenderBinding,
            mode: GRAPHICS_MODE_PREFIX.to_string(),
            target: BindingTarget::Direct {
                id,
                instant_rendering,
            },
        }
    }

    /// Graphics binding addressing the caller's neighbor in `direction`.
    #[must_use]
    pub fn relative_graphics(direction: Direction, resolution: Extent2) -> Self {
        Self {
            capability: BindingCapability::GraphicsRenderBinding,
            mode: GRAPHICS_MODE_PREFIX.to_string(),
            target: BindingTarget::Relative {
                direction,
                resolution,
            },
        }
    }

    /// The capability this binding advertises.
    #[must_use]
    pub const fn capability(&self) -> BindingCapability {
        self.capability
    }

    /// The opaque mode prefix this binding negotiates with.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// How this binding finds its device.
    #[must_use]
    pub const fn target(&self) -> BindingTarget {
        self.target
    }

    /// Resolves a text sink for the current call.
    ///
    /// # Errors
    ///
    /// Fails with `TargetNotFound` when a direct handle is stale or no
    /// monitor occupies the relative target location.
    pub fn resolve_text(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &MonitorStore,
    ) -> ExecResult<TextCommandSink> {
        let resolved = self.resolve_target(line, ctx, store)?;
        Ok(TextCommandSink::new(
            resolved.id,
            resolved.device_resolution,
            resolved.required_mode,
            resolved.instant_rendering,
        ))
    }

    /// Resolves a graphics sink for the current call.
    ///
    /// # Errors
    ///
    /// Fails with `TargetNotFound` when a direct handle is stale or no
    /// monitor occupies the relative target location.
    pub fn resolve_graphics(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &MonitorStore,
    ) -> ExecResult<GraphicsCommandSink> {
        let resolved = self.resolve_target(line, ctx, store)?;
        Ok(GraphicsCommandSink::new(
            resolved.id,
            resolved.device_resolution,
            resolved.required_mode,
            resolved.instant_rendering,
        ))
    }

    /// Common resolution step: find the structure, sample its resolution,
    /// build the required-mode tag.
    fn resolve_target(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &MonitorStore,
    ) -> ExecResult<ResolvedTarget> {
        match self.target {
            BindingTarget::Direct {
                id,
                instant_rendering,
            } => {
                let Some(monitor) = store.monitor(id) else {
                    return Err(ExecutionError::new(line, ExecutionErrorKind::TargetNotFound));
                };
                let device_resolution = monitor.resolution().as_extent();
                Ok(ResolvedTarget {
                    id,
                    device_resolution,
                    required_mode: encode_mode(&self.mode, device_resolution),
                    instant_rendering,
                })
            }
            BindingTarget::Relative {
                direction,
                resolution,
            } => {
                let target_location = ctx.location + direction.vector();
                let Some(id) = store.monitor_at(target_location) else {
                    return Err(ExecutionError::new(line, ExecutionErrorKind::TargetNotFound));
                };
                let Some(monitor) = store.monitor(id) else {
                    return Err(ExecutionError::new(line, ExecutionErrorKind::TargetNotFound));
                };
                Ok(ResolvedTarget {
                    id,
                    device_resolution: monitor.resolution().as_extent(),
                    required_mode: encode_mode(&self.mode, resolution),
                    instant_rendering: false,
                })
            }
        }
    }
}

/// Outcome of one binding-resolution step.
struct ResolvedTarget {
    id: StructureId,
    device_resolution: Extent2,
    required_mode: String,
    instant_rendering: bool,
}

/// Appends the `x,y` resolution encoding to a mode prefix.
fn encode_mode(prefix: &str, resolution: Extent2) -> String {
    format!("{prefix}{},{}", resolution.x, resolution.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{MonitorStructure, Resolution};
    use argus_shared::{BlockRegion, IVec3, Side};

    fn store_with_monitor(id: u64, min: IVec3) -> MonitorStore {
        let mut store = MonitorStore::new();
        let size = IVec3::new(3, 1, 2);
        store.insert_monitor(
            StructureId::new(id),
            MonitorStructure::new(size, Side::Front, Resolution::new(24, 5)),
            &BlockRegion::new(min, size),
        );
        store
    }

    #[test]
    fn test_direct_resolution_samples_device() {
        let store = store_with_monitor(4, IVec3::ZERO);
        let ctx = ComputerContext::at(IVec3::new(50, 50, 50));

        let sink = RenderBinding::direct_text(StructureId::new(4), true)
            .resolve_text(1, &ctx, &store)
            .unwrap();
        assert_eq!(sink.max_characters(), Extent2::new(24, 5));
        assert_eq!(sink.required_mode(), "text:24,5");
        assert!(sink.is_instant_rendering());
    }

    #[test]
    fn test_direct_resolution_of_stale_handle_fails() {
        let store = MonitorStore::new();
        let ctx = ComputerContext::at(IVec3::ZERO);

        let err = RenderBinding::direct_text(StructureId::new(4), false)
            .resolve_text(7, &ctx, &store)
            .unwrap_err();
        assert_eq!(err.kind, ExecutionErrorKind::TargetNotFound);
        assert_eq!(err.line, 7);
    }

    #[test]
    fn test_relative_resolution_walks_one_block() {
        let store = store_with_monitor(9, IVec3::new(1, 0, 0));
        let ctx = ComputerContext::at(IVec3::ZERO);

        let binding = RenderBinding::relative_text(Direction::East, Extent2::new(24, 5));
        let sink = binding.resolve_text(1, &ctx, &store).unwrap();
        assert_eq!(sink.max_characters(), Extent2::new(24, 5));
        assert!(!sink.is_instant_rendering());
    }

    #[test]
    fn test_relative_resolution_misses_empty_location() {
        let store = store_with_monitor(9, IVec3::new(1, 0, 0));
        let ctx = ComputerContext::at(IVec3::ZERO);

        let binding = RenderBinding::relative_text(Direction::West, Extent2::new(24, 5));
        let err = binding.resolve_text(3, &ctx, &store).unwrap_err();
        assert_eq!(err.kind, ExecutionErrorKind::TargetNotFound);
    }

    #[test]
    fn test_relative_graphics_mode_encodes_configured_resolution() {
        let store = store_with_monitor(2, IVec3::new(0, 1, 0));
        let ctx = ComputerContext::at(IVec3::ZERO);

        let binding = RenderBinding::relative_graphics(Direction::Up, Extent2::new(96, 48));
        let sink = binding.resolve_graphics(1, &ctx, &store).unwrap();
        assert_eq!(sink.required_mode(), "graphics:96,48");
        assert!(!sink.is_instant_rendering());
    }
}
