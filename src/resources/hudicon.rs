use bevy_ecs::prelude::Resource;

/// Icon shown in the top-right corner while the free camera is active.
#[derive(Resource, Clone, Debug)]
pub struct HudIcon {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}
