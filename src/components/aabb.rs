//! Axis-aligned bounding boxes.
//!
//! Boxes are stored as their four edges in world pixels. The overlap test is
//! a plain separating-axis check on both axes; boxes that only touch along an
//! edge still count as intersecting.

/// Axis-aligned rectangle described by its top, left, right and bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub t: f32,
    pub l: f32,
    pub r: f32,
    pub b: f32,
}

impl Aabb {
    /// Build the box covering `w` x `h` pixels from the top-left corner `(x, y)`.
    pub fn from_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            t: y,
            l: x,
            r: x + w,
            b: y + h,
        }
    }

    pub fn width(&self) -> f32 {
        self.r - self.l
    }

    pub fn height(&self) -> f32 {
        self.b - self.t
    }

    /// Overlap test against another box. See [`do_intersect`].
    pub fn intersects(&self, other: &Aabb) -> bool {
        do_intersect(self, other)
    }
}

/// Check whether two bounding boxes intersect.
///
/// The boxes are disjoint only if one lies strictly to the right of or
/// strictly below the other.
pub fn do_intersect(a: &Aabb, b: &Aabb) -> bool {
    let d_ax = b.l - a.r;
    let d_ay = b.t - a.b;
    let d_bx = a.l - b.r;
    let d_by = a.t - b.b;

    if d_ax > 0.0 || d_ay > 0.0 {
        return false;
    }
    if d_bx > 0.0 || d_by > 0.0 {
        return false;
    }
    true
}
