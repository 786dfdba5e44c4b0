//! Objects the camera can frame.

use std::fmt::Debug;

use glam::{Mat4, Vec3};

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub minimum: Vec3,
    /// Maximum corner.
    pub maximum: Vec3,
}

impl BoundingBox {
    /// Box spanning `minimum..=maximum`.
    #[must_use]
    pub fn new(minimum: Vec3, maximum: Vec3) -> Self {
        Self { minimum, maximum }
    }

    /// Tight box around `points`, `None` when empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for p in rest {
            bounds.minimum = bounds.minimum.min(*p);
            bounds.maximum = bounds.maximum.max(*p);
        }
        Some(bounds)
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.minimum + self.maximum) * 0.5
    }

    /// Length of the min-to-max diagonal.
    #[must_use]
    pub fn diagonal_length(&self) -> f32 {
        (self.maximum - self.minimum).length()
    }

    /// The eight corners.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.minimum, self.maximum);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned box enclosing this box after `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Mat4) -> Self {
        let corners = self.corners().map(|c| transform.transform_point3(c));
        // Eight corners, never empty.
        Self::from_points(&corners).unwrap_or(*self)
    }
}

/// Something with a bounding volume and a world transform.
///
/// The framing math reads the local box, the world translation, and the
/// world-space diagonal length.
pub trait FramingTarget: Debug {
    /// Local-space bounding box.
    fn bounding_box(&self) -> BoundingBox;

    /// Local-to-world transform.
    fn world_matrix(&self) -> Mat4;

    /// World-space translation of the object's origin.
    fn world_position(&self) -> Vec3 {
        let (_, _, translation) =
            self.world_matrix().to_scale_rotation_translation();
        translation
    }

    /// World-space axis-aligned bounding box.
    fn world_bounding_box(&self) -> BoundingBox {
        self.bounding_box().transformed(&self.world_matrix())
    }

    /// Diagonal of the world-space bounding box.
    fn bounding_diagonal_length(&self) -> f32 {
        self.world_bounding_box().diagonal_length()
    }
}

/// Plain mesh description: a name, a local box and a world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMesh {
    /// Display name, used in log output.
    pub name: String,
    /// Local-space bounds.
    pub bounds: BoundingBox,
    /// Local-to-world transform.
    pub world: Mat4,
}

impl TargetMesh {
    /// Mesh with the given local bounds placed at `position`.
    #[must_use]
    pub fn new(name: impl Into<String>, bounds: BoundingBox, position: Vec3) -> Self {
        Self {
            name: name.into(),
            bounds,
            world: Mat4::from_translation(position),
        }
    }
}

impl FramingTarget for TargetMesh {
    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn world_matrix(&self) -> Mat4 {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_is_tight() {
        let bounds = BoundingBox::from_points(&[
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ])
        .unwrap();
        assert_eq!(bounds.minimum, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.maximum, Vec3::new(1.0, 3.0, 2.0));
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn unit_cube_diagonal() {
        let cube = BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        assert!((cube.diagonal_length() - 3.0_f32.sqrt()).abs() < 1e-6);
        assert_eq!(cube.center(), Vec3::ZERO);
    }

    #[test]
    fn translated_mesh_keeps_diagonal() {
        let mesh = TargetMesh::new(
            "crate",
            BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
            Vec3::new(5.0, 10.0, -3.0),
        );
        assert_eq!(mesh.world_position(), Vec3::new(5.0, 10.0, -3.0));
        let world = mesh.world_bounding_box();
        assert_eq!(world.minimum, Vec3::new(4.0, 9.0, -4.0));
        assert!(
            (mesh.bounding_diagonal_length() - mesh.bounds.diagonal_length())
                .abs()
                < 1e-5
        );
    }

    #[test]
    fn scaled_mesh_grows_diagonal() {
        let mesh = TargetMesh {
            name: "big".into(),
            bounds: BoundingBox::new(Vec3::ZERO, Vec3::ONE),
            world: Mat4::from_scale(Vec3::splat(2.0)),
        };
        assert!(
            (mesh.bounding_diagonal_length() - 2.0 * 3.0_f32.sqrt()).abs()
                < 1e-5
        );
    }
}
