//! Math type aliases and spherical helpers.
//!
//! Generators store vertex attributes as plain arrays (see
//! [`Vertex`](crate::mesh::Vertex)) and do their arithmetic on these
//! nalgebra aliases.

use std::f32::consts::{PI, TAU};

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Normalize `v`, leaving a zero vector untouched.
///
/// `nalgebra::Vector3::normalize` divides by the norm and turns a zero
/// vector into NaNs.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or(v)
}

/// Unit tangent of the sphere parameterization at longitude `theta`.
///
/// The sphere is `P(θ, φ) = (r·sinφ·cosθ, r·cosφ, r·sinφ·sinθ)`, so
/// `∂P/∂θ = r·sinφ·(-sinθ, 0, cosθ)`. Normalizing removes the `r·sinφ`
/// factor, which also keeps the tangent defined at the poles.
pub fn spherical_tangent(theta: f32) -> Vec3 {
    Vec3::new(-theta.sin(), 0.0, theta.cos())
}

/// Texture coordinate for spherical angles: `(θ/2π, φ/π)`.
pub fn spherical_uv(theta: f32, phi: f32) -> [f32; 2] {
    [theta / TAU, phi / PI]
}

/// Longitude of a direction in `[0, 2π)`, measured from +X towards +Z.
pub fn longitude(direction: &Vec3) -> f32 {
    let theta = direction.z.atan2(direction.x);
    if theta < 0.0 { theta + TAU } else { theta }
}

/// Colatitude of `position` on a sphere of `radius`, measured from +Y.
pub fn colatitude(position: &Vec3, radius: f32) -> f32 {
    (position.y / radius).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn tangent_is_unit_length() {
        for i in 0..16 {
            let theta = i as f32 * TAU / 16.0;
            assert!((spherical_tangent(theta).norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn tangent_is_orthogonal_to_radial_direction() {
        let theta = 0.7_f32;
        let radial = Vec3::new(theta.cos(), 0.0, theta.sin());
        assert!(spherical_tangent(theta).dot(&radial).abs() < 1e-6);
    }

    #[test]
    fn longitude_wraps_into_positive_range() {
        assert!((longitude(&Vec3::new(1.0, 0.0, 0.0)) - 0.0).abs() < 1e-6);
        assert!((longitude(&Vec3::new(0.0, 0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((longitude(&Vec3::new(0.0, 0.0, -1.0)) - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn colatitude_clamps_rounding_error() {
        let above_pole = Vec3::new(0.0, 1.000_001, 0.0);
        assert_eq!(colatitude(&above_pole, 1.0), 0.0);
        assert!((colatitude(&Vec3::new(1.0, 0.0, 0.0), 1.0) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn normalize_or_zero_handles_zero() {
        assert_eq!(normalize_or_zero(Vec3::zeros()), Vec3::zeros());
        let n = normalize_or_zero(Vec3::new(3.0, 0.0, 4.0));
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).norm() < 1e-6);
    }

    #[test]
    fn uv_spans_unit_square() {
        assert_eq!(spherical_uv(0.0, 0.0), [0.0, 0.0]);
        let [u, v] = spherical_uv(TAU, PI);
        assert!((u - 1.0).abs() < 1e-6);
        assert!((v - 1.0).abs() < 1e-6);
    }
}
