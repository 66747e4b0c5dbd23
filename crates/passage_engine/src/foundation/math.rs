//! Math utilities and types
//!
//! Provides the fundamental math types used for world positions, clone
//! offsets, and scale factors.

pub use nalgebra::{Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Euclidean distance between two points
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).magnitude()
}
