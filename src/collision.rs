//! Axis-aligned bounding boxes and the overlap predicates built on them.
//!
//! Two separate, explicitly-named capabilities live here:
//!
//! - [`Aabb::intersects`] — proper pairwise box-vs-box test (disjoint iff one
//!   box's max is below the other's min on either axis).
//! - [`overlaps_viewport`] — box vs the viewport client rectangle, used by
//!   the projectile culling system.
//!
//! Boxes are in screen space: origin top-left, +y down, pixel units.

use crate::graphics::ViewportMetrics;
use bevy::prelude::*;

/// An axis-aligned bounding box stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from its center and half-extents.
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grow the box outward by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// True when the boxes overlap (shared edges count as touching).
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || other.max.x < self.min.x
            || self.max.y < other.min.y
            || other.max.y < self.min.y)
    }
}

/// True when `aabb` overlaps the viewport client rectangle
/// `[0, width] × [0, height]`.
pub fn overlaps_viewport(aabb: &Aabb, metrics: &ViewportMetrics) -> bool {
    let client = Aabb {
        min: Vec2::ZERO,
        max: Vec2::new(metrics.width, metrics.height),
    };
    aabb.intersects(&client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, y: f32) -> Aabb {
        Aabb::from_center_half_extents(Vec2::new(x, y), Vec2::splat(1.0))
    }

    #[test]
    fn from_center_half_extents_produces_expected_corners() {
        let b = Aabb::from_center_half_extents(Vec2::new(10.0, 20.0), Vec2::new(3.0, 5.0));
        assert_eq!(b.min, Vec2::new(7.0, 15.0));
        assert_eq!(b.max, Vec2::new(13.0, 25.0));
    }

    #[test]
    fn overlapping_boxes_intersect() {
        assert!(unit_box_at(0.0, 0.0).intersects(&unit_box_at(1.5, 0.0)));
        assert!(unit_box_at(0.0, 0.0).intersects(&unit_box_at(1.5, 1.5)));
    }

    #[test]
    fn disjoint_on_either_axis_means_no_intersection() {
        // Separated on x only.
        assert!(!unit_box_at(0.0, 0.0).intersects(&unit_box_at(5.0, 0.0)));
        // Separated on y only.
        assert!(!unit_box_at(0.0, 0.0).intersects(&unit_box_at(0.0, 5.0)));
    }

    #[test]
    fn touching_edges_count_as_intersecting() {
        assert!(unit_box_at(0.0, 0.0).intersects(&unit_box_at(2.0, 0.0)));
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = unit_box_at(0.0, 0.0);
        let b = unit_box_at(5.0, 5.0);
        assert_eq!(a.intersects(&b), b.intersects(&a));
        let c = unit_box_at(1.0, 1.0);
        assert_eq!(a.intersects(&c), c.intersects(&a));
    }

    #[test]
    fn inflate_grows_every_side() {
        let b = unit_box_at(0.0, 0.0).inflate(2.0);
        assert_eq!(b.min, Vec2::splat(-3.0));
        assert_eq!(b.max, Vec2::splat(3.0));
    }

    #[test]
    fn box_inside_viewport_overlaps() {
        let metrics = ViewportMetrics {
            width: 100.0,
            height: 100.0,
        };
        assert!(overlaps_viewport(&unit_box_at(50.0, 50.0), &metrics));
    }

    #[test]
    fn box_beyond_any_edge_does_not_overlap() {
        let metrics = ViewportMetrics {
            width: 100.0,
            height: 100.0,
        };
        assert!(!overlaps_viewport(&unit_box_at(-10.0, 50.0), &metrics));
        assert!(!overlaps_viewport(&unit_box_at(110.0, 50.0), &metrics));
        assert!(!overlaps_viewport(&unit_box_at(50.0, -10.0), &metrics));
        assert!(!overlaps_viewport(&unit_box_at(50.0, 110.0), &metrics));
    }

    #[test]
    fn box_straddling_an_edge_overlaps() {
        let metrics = ViewportMetrics {
            width: 100.0,
            height: 100.0,
        };
        // Center just outside, but the box reaches back across the edge.
        assert!(overlaps_viewport(&unit_box_at(-0.5, 50.0), &metrics));
    }
}
