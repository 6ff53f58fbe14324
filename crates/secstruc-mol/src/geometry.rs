//! Geometry primitives on backbone coordinates
//!
//! All angles are returned in degrees.

use lin_alg::f64::Vec3;

/// Squared Euclidean distance; cheap pre-filter for cutoff tests
#[inline]
pub fn distance_squared(a: Vec3, b: Vec3) -> f64 {
    (a - b).magnitude_squared()
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    (a - b).magnitude()
}

/// Angle between two vectors in degrees, range [0, 180]
///
/// Returns 0 when either vector has zero length.
pub fn angle(v1: Vec3, v2: Vec3) -> f64 {
    let len = v1.magnitude() * v2.magnitude();
    if len < 1e-12 {
        return 0.0;
    }
    let cos = (v1.dot(v2) / len).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Torsion angle of four points in degrees, range (-180, 180]
///
/// Positive when the far bond turns clockwise viewed along `a2 -> a3`.
pub fn torsion(a1: Vec3, a2: Vec3, a3: Vec3, a4: Vec3) -> f64 {
    let ab = a1 - a2;
    let cb = a3 - a2;
    let bc = a2 - a3;
    let dc = a4 - a3;

    let abc = ab.cross(cb);
    let bcd = bc.cross(dc);

    let value = angle(abc, bcd);
    if cb.dot(abc.cross(bcd)) < 0.0 {
        -value
    } else {
        value
    }
}

/// Unit vector, or `None` for a degenerate input
pub fn unit(v: Vec3) -> Option<Vec3> {
    let len = v.magnitude();
    if len < 1e-12 {
        None
    } else {
        Some(v * (1.0 / len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert_close_within(a, b, 1e-6);
    }

    fn assert_close_within(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "{a} != {b}");
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_close(distance(a, b), 5.0);
        assert_close(distance_squared(a, b), 25.0);
    }

    #[test]
    fn test_angle() {
        assert_close(angle(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)), 90.0);
        assert_close(angle(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0)), 180.0);
    }

    #[test]
    fn test_angle_parallel_vectors() {
        // acos loses precision near 1
        assert_close_within(angle(Vec3::new(1.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.0)), 0.0, 1e-4);
        assert_close_within(angle(Vec3::new(0.3, -1.7, 2.2), Vec3::new(-0.6, 3.4, -4.4)), 180.0, 1e-4);
    }

    #[test]
    fn test_angle_zero_length() {
        assert_eq!(angle(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_torsion_90() {
        let a1 = Vec3::new(0.0, 1.0, 0.0);
        let a2 = Vec3::new(0.0, 0.0, 0.0);
        let a3 = Vec3::new(1.0, 0.0, 0.0);
        let a4 = Vec3::new(1.0, 0.0, 1.0);
        assert_close(torsion(a1, a2, a3, a4), 90.0);
        assert_close(torsion(a4, a3, a2, a1), 90.0);
    }

    #[test]
    fn test_torsion_sign() {
        let a1 = Vec3::new(0.0, 1.0, 0.0);
        let a2 = Vec3::new(0.0, 0.0, 0.0);
        let a3 = Vec3::new(1.0, 0.0, 0.0);
        let a4 = Vec3::new(1.0, 0.0, -1.0);
        assert_close(torsion(a1, a2, a3, a4), -90.0);
    }

    #[test]
    fn test_torsion_cis_trans() {
        let a1 = Vec3::new(0.0, 1.0, 0.0);
        let a2 = Vec3::new(0.0, 0.0, 0.0);
        let a3 = Vec3::new(1.0, 0.0, 0.0);
        assert_close(torsion(a1, a2, a3, Vec3::new(1.0, 1.0, 0.0)), 0.0);
        assert_close(torsion(a1, a2, a3, Vec3::new(1.0, -1.0, 0.0)).abs(), 180.0);
    }

    #[test]
    fn test_unit() {
        let u = unit(Vec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_close(u.z, 1.0);
        assert!(unit(Vec3::new(0.0, 0.0, 0.0)).is_none());
    }
}
