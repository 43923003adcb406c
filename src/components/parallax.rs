//! Horizontally repeating background layers.
//!
//! A [`Parallax`] entity scrolls at `factor` times the camera's horizontal
//! displacement. Smaller factors read as farther away.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Parallax {
    pub tex_key: String,
    pub factor: f32,
    /// Width of one repetition in pixels.
    pub width: f32,
    pub height: f32,
    /// Vertical placement in world pixels.
    pub y: f32,
}

impl Parallax {
    /// Left edge of the first copy for a camera at `camera_x`, in `(-width, 0]`.
    pub fn offset(&self, camera_x: f32) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        -(camera_x * self.factor).rem_euclid(self.width)
    }

    /// World x of every copy needed to cover `[camera_x, camera_x + view_width]`.
    pub fn copies(&self, camera_x: f32, view_width: f32) -> Vec<f32> {
        if self.width <= 0.0 {
            return Vec::new();
        }
        let mut xs = Vec::new();
        let mut x = camera_x + self.offset(camera_x);
        let end = camera_x + view_width;
        while x < end {
            xs.push(x);
            x += self.width;
        }
        xs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(factor: f32) -> Parallax {
        Parallax {
            tex_key: "sky".into(),
            factor,
            width: 400.0,
            height: 300.0,
            y: 0.0,
        }
    }

    #[test]
    fn offset_wraps_into_one_width() {
        let p = layer(0.5);
        assert_eq!(p.offset(0.0), 0.0);
        assert_eq!(p.offset(200.0), -100.0);
        assert_eq!(p.offset(1000.0), -100.0);
        for cam in [0.0, 13.0, 799.0, 5000.0] {
            let o = p.offset(cam);
            assert!(o <= 0.0 && o > -p.width);
        }
    }

    #[test]
    fn copies_cover_the_view() {
        let p = layer(0.25);
        let cam = 333.0;
        let view = 900.0;
        let xs = p.copies(cam, view);
        assert!(xs[0] <= cam);
        assert!(xs.last().copied().unwrap_or_default() + p.width >= cam + view);
    }

    #[test]
    fn zero_width_draws_nothing() {
        let mut p = layer(1.0);
        p.width = 0.0;
        assert!(p.copies(0.0, 800.0).is_empty());
    }
}
