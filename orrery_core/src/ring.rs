// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular layout geometry.
//!
//! Each item of the carousel sits on a circle of radius `r` in the x/z plane,
//! viewed along the z axis. The focused item is at the near point of the
//! circle (`z = 0`); the rest recede behind it. [`Placement::compute`] maps an
//! item's index offset from the focus to:
//!
//! - a position `(x, z)` on the circle,
//! - a facing rotation about the Y axis,
//! - a normalized depth in `[0, 1]` (1 = nearest),
//! - depth-derived opacity, scale, and stacking order.
//!
//! The computation is a pure function of its inputs. It allocates nothing and
//! touches no state, so hosts can call it for every item on every frame.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::transform::Transform3d;

/// Smallest opacity, assigned at the far point of the ring.
pub const MIN_OPACITY: f32 = 0.3;

/// Smallest scale factor, assigned at the far point of the ring.
pub const MIN_SCALE: f64 = 0.7;

/// The projected pose of one carousel item.
///
/// Produced by [`Placement::compute`]. Hosts either read the individual
/// fields (e.g. to emit CSS transforms) or collapse the pose into a single
/// matrix via [`to_transform`](Self::to_transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Angular offset from the focused item, in degrees.
    pub angle_deg: f64,
    /// Horizontal position on the ring.
    pub x: f64,
    /// Depth position; `0.0` at the focus, negative receding away.
    pub z: f64,
    /// Facing rotation about the Y axis, in degrees (`-angle_deg`).
    pub rotate_y_deg: f64,
    /// Normalized depth in `[0, 1]`; `1.0` at the focus.
    pub depth: f64,
    /// Depth-derived opacity in `[MIN_OPACITY, 1]`.
    pub opacity: f32,
    /// Depth-derived uniform scale in `[MIN_SCALE, 1]`.
    pub scale: f64,
    /// Stacking order; closer items have larger values.
    pub stack: u32,
}

impl Placement {
    /// Computes the placement of `item` on a ring of `total` items focused at
    /// `focus`.
    ///
    /// `radius` is the distance of the ring from the viewing axis and must be
    /// positive. `item` and `focus` must both be in `[0, total)`; callers
    /// construct carousels through [`Carousel::new`], which rejects empty
    /// item sets, so `total >= 1` holds throughout.
    ///
    /// With `total = 1` the only item is always the focus and its angle is 0.
    ///
    /// [`Carousel::new`]: crate::carousel::Carousel::new
    #[must_use]
    pub fn compute(item: usize, focus: usize, total: usize, radius: f64) -> Self {
        debug_assert!(total >= 1, "placement requires at least one item");
        debug_assert!(
            item < total && focus < total,
            "indices must be in [0, total)"
        );
        debug_assert!(radius > 0.0, "radius must be positive");

        let step_deg = 360.0 / total as f64;
        let angle_deg = (item as f64 - focus as f64) * step_deg;
        let angle = angle_deg.to_radians();

        let x = angle.sin() * radius;
        let z = angle.cos() * radius - radius;

        // Normalize depth so the focus sits at 1.0 and the far point at 0.0.
        let depth = (z + radius) / (2.0 * radius);

        #[expect(
            clippy::cast_possible_truncation,
            reason = "depth is in [0, 1]; the derived opacity fits f32 and the stack index fits u32"
        )]
        let (opacity, stack) = (
            (f64::from(MIN_OPACITY) + depth * (1.0 - f64::from(MIN_OPACITY))) as f32,
            (depth * 100.0).round() as u32,
        );

        Self {
            angle_deg,
            x,
            z,
            rotate_y_deg: -angle_deg,
            depth,
            opacity,
            scale: MIN_SCALE + depth * (1.0 - MIN_SCALE),
            stack,
        }
    }

    /// Collapses this pose into a single transform: translate to `(x, 0, z)`,
    /// rotate about Y to face the viewer, then scale about the item's center.
    #[must_use]
    pub fn to_transform(&self) -> Transform3d {
        Transform3d::from_translation(self.x, 0.0, self.z)
            * Transform3d::from_rotation_y(self.rotate_y_deg.to_radians())
            * Transform3d::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_item_is_front_and_center() {
        for total in 1..=12 {
            for focus in 0..total {
                let p = Placement::compute(focus, focus, total, 300.0);
                assert_eq!(p.angle_deg, 0.0, "total={total} focus={focus}");
                assert!(p.x.abs() < 1e-9);
                assert!(p.z.abs() < 1e-9);
                assert_eq!(p.opacity, 1.0);
                assert_eq!(p.scale, 1.0);
                assert_eq!(p.stack, 100);
            }
        }
    }

    #[test]
    fn opacity_and_scale_stay_in_range() {
        for total in 1..=12 {
            for focus in 0..total {
                for item in 0..total {
                    let p = Placement::compute(item, focus, total, 250.0);
                    assert!(
                        (MIN_OPACITY..=1.0).contains(&p.opacity),
                        "opacity {} out of range (total={total})",
                        p.opacity
                    );
                    assert!(
                        (MIN_SCALE..=1.0).contains(&p.scale),
                        "scale {} out of range (total={total})",
                        p.scale
                    );
                    assert!((0.0..=1.0).contains(&p.depth));
                }
            }
        }
    }

    #[test]
    fn opposite_item_is_farthest() {
        // With an even count, the item diametrically opposite the focus sits
        // at the far point: z = -2r, depth 0, minimum opacity and scale.
        let p = Placement::compute(3, 0, 6, 100.0);
        assert!((p.z + 200.0).abs() < 1e-9);
        assert!(p.depth.abs() < 1e-9);
        assert!((p.opacity - MIN_OPACITY).abs() < 1e-6);
        assert!((p.scale - MIN_SCALE).abs() < 1e-9);
        assert_eq!(p.stack, 0);
    }

    #[test]
    fn neighbors_are_symmetric() {
        let right = Placement::compute(1, 0, 8, 300.0);
        let left = Placement::compute(7, 0, 8, 300.0);
        let eps = 1e-9;
        assert!((right.x + left.x).abs() < eps, "x mirrors across the axis");
        assert!((right.z - left.z).abs() < eps, "z equal at equal offsets");
        assert!((right.rotate_y_deg + left.rotate_y_deg).abs() < eps);
        assert_eq!(right.stack, left.stack);
    }

    #[test]
    fn closer_items_stack_higher() {
        // Walking away from the focus, depth and stack must not increase.
        let total = 7;
        let mut prev_stack = u32::MAX;
        let mut prev_depth = f64::INFINITY;
        for offset in 0..=total / 2 {
            let p = Placement::compute(offset, 0, total, 300.0);
            assert!(p.depth <= prev_depth, "depth decreases away from focus");
            assert!(p.stack <= prev_stack, "stack decreases away from focus");
            prev_depth = p.depth;
            prev_stack = p.stack;
        }
    }

    #[test]
    fn single_item_ring() {
        let p = Placement::compute(0, 0, 1, 300.0);
        assert_eq!(p.angle_deg, 0.0);
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.scale, 1.0);
    }

    #[test]
    fn rotation_faces_against_angular_offset() {
        let p = Placement::compute(2, 0, 8, 300.0);
        assert_eq!(p.rotate_y_deg, -p.angle_deg);
    }

    #[test]
    fn deterministic() {
        let a = Placement::compute(4, 1, 9, 275.0);
        let b = Placement::compute(4, 1, 9, 275.0);
        assert_eq!(a, b);
    }

    #[test]
    fn focus_transform_is_identity() {
        let t = Placement::compute(0, 0, 5, 300.0).to_transform();
        let eps = 1e-9;
        for (j, col) in t.cols.iter().enumerate() {
            for (i, v) in col.iter().enumerate() {
                let expected = Transform3d::IDENTITY.cols[j][i];
                assert!((v - expected).abs() < eps, "col {j} row {i}");
            }
        }
    }

    #[test]
    fn off_focus_transform_is_finite_and_scaled() {
        let p = Placement::compute(2, 0, 6, 300.0);
        let t = p.to_transform();
        assert!(t.is_finite());
        // Translation column carries the ring position.
        let eps = 1e-9;
        assert!((t.col(3)[0] - p.x).abs() < eps);
        assert!((t.col(3)[2] - p.z).abs() < eps);
    }
}
