//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay: actor
//! bounding boxes, tile grid probes and the diagnostics text. F11 toggles it.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws overlays.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
