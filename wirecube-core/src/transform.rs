/// Vector rotation math and per-axis rotation state
use nalgebra::{Matrix3, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Component-wise sum of two rotation states
    pub fn add(&self, other: &RotationState) -> RotationState {
        RotationState::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

pub fn add(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a + b
}

pub fn subtract(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a - b
}

pub fn rotate_x(v: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

pub fn rotate_y(v: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos - v.z * sin, v.y, v.x * sin + v.z * cos)
}

pub fn rotate_z(v: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Rotate a vector about the origin, X first, then Y, then Z.
///
/// The order is not commutative and must stay X → Y → Z.
pub fn rotate(v: &Vector3<f64>, rotation: &RotationState) -> Vector3<f64> {
    rotate_z(&rotate_y(&rotate_x(v, rotation.x), rotation.y), rotation.z)
}

/// Transform builder for pivot-relative rotations
pub struct Transform;

impl Transform {
    /// Create the composed rotation matrix `Rz * Ry * Rx`
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix3<f64> {
        let (sx, cx) = rotation.x.sin_cos();
        let (sy, cy) = rotation.y.sin_cos();
        let (sz, cz) = rotation.z.sin_cos();

        #[rustfmt::skip]
        let rx = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cx, -sx,
            0.0, sx, cx,
        );
        #[rustfmt::skip]
        let ry = Matrix3::new(
            cy, 0.0, -sy,
            0.0, 1.0, 0.0,
            sy, 0.0, cy,
        );
        #[rustfmt::skip]
        let rz = Matrix3::new(
            cz, -sz, 0.0,
            sz, cz, 0.0,
            0.0, 0.0, 1.0,
        );

        // Apply rotations in order: X, Y, Z
        rz * ry * rx
    }

    /// Rotate `point` about `pivot`: translate to origin, rotate, translate back
    pub fn about_pivot(
        point: &Vector3<f64>,
        pivot: &Vector3<f64>,
        rotation: &RotationState,
    ) -> Vector3<f64> {
        add(&rotate(&subtract(point, pivot), rotation), pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: &Vector3<f64>, b: &Vector3<f64>) {
        assert!((a - b).norm() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-9);
        assert!((state.y - 0.2).abs() < 1e-9);
        assert!((state.z - 0.3).abs() < 1e-9);

        let sum = state.add(&RotationState::new(1.0, 1.0, 1.0));
        assert!((sum.z - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix3::identity()).norm() < 1e-9);

        let v = Vector3::new(3.0, -4.0, 5.0);
        assert_eq!(rotate(&v, &rotation), v);
    }

    #[test]
    fn test_quarter_turns() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_close(&rotate_x(&v, FRAC_PI_2), &Vector3::new(1.0, -3.0, 2.0));
        assert_close(&rotate_y(&v, FRAC_PI_2), &Vector3::new(-3.0, 2.0, 1.0));
        assert_close(&rotate_z(&v, FRAC_PI_2), &Vector3::new(-2.0, 1.0, 3.0));
    }

    #[test]
    fn test_composition_order_matches_matrix() {
        let samples = [
            (Vector3::new(1.0, 0.0, 0.0), RotationState::new(0.3, 0.0, 0.0)),
            (Vector3::new(50.0, -20.0, 7.5), RotationState::new(0.7, -1.2, 2.9)),
            (Vector3::new(-3.0, 8.0, 1.0), RotationState::new(4.0, 5.5, -0.25)),
            (Vector3::new(100.0, 100.0, 50.0), RotationState::new(-7.0, 13.0, 0.01)),
        ];

        for (v, rotation) in samples {
            let composed = rotate_z(&rotate_y(&rotate_x(&v, rotation.x), rotation.y), rotation.z);
            let by_matrix = Transform::rotation_matrix(&rotation) * v;
            assert_close(&rotate(&v, &rotation), &composed);
            assert_close(&rotate(&v, &rotation), &by_matrix);
        }
    }

    #[test]
    fn test_order_is_not_commutative() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let xyz = rotate(&v, &RotationState::new(0.5, 0.5, 0.0));
        let yx = rotate_x(&rotate_y(&v, 0.5), 0.5);
        assert!((xyz - yx).norm() > 1e-3);
    }

    #[test]
    fn test_pivot_is_fixed_point() {
        let pivot = Vector3::new(50.0, 50.0, 50.0);
        for rotation in [
            RotationState::new(0.1, 0.2, 0.3),
            RotationState::new(-9.0, 100.0, 3.0),
        ] {
            assert_close(&Transform::about_pivot(&pivot, &pivot, &rotation), &pivot);
        }
    }

    #[test]
    fn test_about_pivot_rotates_relative_offset() {
        let pivot = Vector3::new(10.0, 10.0, 0.0);
        let point = Vector3::new(11.0, 10.0, 0.0);
        let rotated = Transform::about_pivot(&point, &pivot, &RotationState::new(0.0, 0.0, FRAC_PI_2));
        assert_close(&rotated, &Vector3::new(10.0, 11.0, 0.0));
    }
}
