//! Camera matrix construction.
//!
//! The two functions in this module build the matrices a renderer
//! concatenates in front of every object transform: [`view_matrix`] maps
//! world space into camera space, and [`projection_matrix`] maps camera
//! space into clip space. Both follow the right-handed convention where the
//! camera looks down its local negative Z axis, and the projection maps the
//! near..far range onto [-1, 1] clip-space depth.
//!
//! Degenerate inputs (zero-length directions, `near == far`, a field of
//! view of 0 or π) are not checked for; they divide by zero and propagate
//! non-finite values into the result, just like the vector operations they
//! are built from. Callers constructing camera matrices every frame are
//! expected to keep their camera state valid.

use crate::traits::{Signed, Sqrt, Trig};
use crate::{vec4, Mat4, Vec3};

/// Builds the matrix transforming world-space points into camera space.
///
/// The camera sits at `eye` and looks along `forward`, which does not need
/// to be normalized. `up` is only a hint: it picks which way the camera
/// rolls, and does not need to be orthogonal to `forward`. The basis of the
/// resulting camera frame is derived with two cross products, so its right,
/// up and backward axes are mutually orthonormal even for a skewed hint.
///
/// `forward` must have non-zero length and must not be parallel to `up`;
/// otherwise a normalization inside divides by zero.
///
/// # Examples
///
/// ```
/// # use lumen_linalg::*;
/// let view = view_matrix(vec3(0.0, 0.0, 5.0), -Vec3f::Z, Vec3f::Y);
///
/// // The eye position itself lands at the camera-space origin.
/// assert_eq!(view * vec4(0.0, 0.0, 5.0, 1.0), vec4(0.0, 0.0, 0.0, 1.0));
/// ```
pub fn view_matrix<T: Signed + Sqrt>(eye: Vec3<T>, forward: Vec3<T>, up: Vec3<T>) -> Mat4<T> {
    let f = forward.normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);

    // The rotation rows are the derived basis vectors; for an orthonormal
    // basis the transpose equals the inverse, so this maps world to camera
    // without inverting anything. The translation column is the eye
    // position expressed in that basis, negated.
    let mut view = Mat4::ZERO;
    *view.column_mut(0) = vec4(s.x, u.x, -f.x, T::ZERO);
    *view.column_mut(1) = vec4(s.y, u.y, -f.y, T::ZERO);
    *view.column_mut(2) = vec4(s.z, u.z, -f.z, T::ZERO);
    *view.column_mut(3) = vec4(-s.dot(eye), -u.dot(eye), f.dot(eye), T::ONE);
    view
}

/// Builds a perspective projection matrix from lens parameters.
///
/// `fov` is the full vertical viewing angle in radians, `aspect_ratio` is
/// width over height of the target surface, and `near`/`far` bound the
/// visible depth range, with `0 < near < far`. Camera-space depths `-near`
/// and `-far` map to clip-space depths `-1` and `+1` after the perspective
/// divide.
///
/// `fov` must lie strictly between 0 and π and `near` must differ from
/// `far`; the tangent singularity and the `far - near` divisor are not
/// guarded.
///
/// # Examples
///
/// ```
/// # use lumen_linalg::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let proj = projection_matrix(FRAC_PI_2, 16.0 / 9.0, 0.1, 1000.0);
/// assert_eq!(proj[(3, 2)], -1.0);
/// ```
pub fn projection_matrix<T: Signed + Trig>(fov: T, aspect_ratio: T, near: T, far: T) -> Mat4<T> {
    let two = T::ONE + T::ONE;
    let tan_half_fov = (fov / two).tan();

    let mut proj = Mat4::splat(T::ZERO);
    proj[(0, 0)] = T::ONE / (aspect_ratio * tan_half_fov);
    proj[(1, 1)] = T::ONE / tan_half_fov;
    proj[(2, 2)] = -(far + near) / (far - near);
    // This row copies -z into the output w, driving the perspective divide.
    proj[(3, 2)] = -T::ONE;
    proj[(2, 3)] = -(two * far * near) / (far - near);
    proj
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use crate::{vec3, Mat4f, Vec3f, Vec4f};

    use super::*;

    /// The rotation rows of a view matrix, as world-space vectors.
    fn basis(view: &Mat4f) -> (Vec3f, Vec3f, Vec3f) {
        let row = |r: usize| vec3(view[(r, 0)], view[(r, 1)], view[(r, 2)]);
        (row(0), row(1), row(2))
    }

    fn random_unit_vec3() -> Vec3f {
        let v = Vec3f::from_fn(|_| fastrand::f32() * 2.0 - 1.0);
        if v.length2() < 1e-4 {
            Vec3f::X
        } else {
            v.normalize()
        }
    }

    #[test]
    fn view_canonical_pose() {
        let view = view_matrix(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0), Vec3f::Y);

        let (s, u, back) = basis(&view);
        assert_eq!(s, Vec3f::X);
        assert_eq!(u, Vec3f::Y);
        assert_eq!(back, Vec3f::Z);
        assert_eq!(view.column(3), vec4(0.0, 0.0, -5.0, 1.0));
    }

    #[test]
    fn view_maps_eye_to_origin() {
        let eye = vec3(3.0, -2.5, 12.0);
        let view = view_matrix(eye, vec3(-1.0, 0.25, -2.0), Vec3f::Y);
        assert_abs_diff_eq!(
            view * eye.extend(1.0),
            vec4(0.0, 0.0, 0.0, 1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn view_basis_is_orthonormal_for_skewed_up() {
        // `up` is deliberately neither unit-length nor orthogonal to
        // `forward`; the builder must correct for that.
        let view = view_matrix(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, -3.0), vec3(0.2, 1.0, 0.4));

        let (s, u, back) = basis(&view);
        assert_abs_diff_eq!(s.dot(u), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s.dot(back), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(u.dot(back), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(u.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(back.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn view_random_poses() {
        for _ in 0..100 {
            let eye = Vec3f::from_fn(|_| fastrand::f32() * 20.0 - 10.0);
            let forward = random_unit_vec3();
            let up = random_unit_vec3();
            if forward.cross(up).length2() < 1e-3 {
                continue; // parallel pair violates the precondition
            }

            let view = view_matrix(eye, forward, up);
            assert_abs_diff_eq!(
                view * eye.extend(1.0),
                vec4(0.0, 0.0, 0.0, 1.0),
                epsilon = 1e-3
            );

            // A point one unit ahead of the eye ends up one unit down the
            // camera's -Z axis.
            let ahead = view * (eye + forward).extend(1.0);
            assert_abs_diff_eq!(ahead, vec4(0.0, 0.0, -1.0, 1.0), epsilon = 1e-3);
        }
    }

    #[test]
    fn projection_square_90_degrees() {
        let proj = projection_matrix(FRAC_PI_2, 1.0, 1.0, 100.0);

        assert_abs_diff_eq!(proj[(0, 0)], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(proj[(1, 1)], 1.0, epsilon = 1e-6);
        assert_eq!(proj[(3, 2)], -1.0);
        assert!(proj[(2, 2)] < 0.0);
    }

    #[test]
    fn projection_respects_aspect_ratio() {
        let proj = projection_matrix(FRAC_PI_2, 2.0, 0.1, 100.0);
        assert_abs_diff_eq!(proj[(0, 0)] * 2.0, proj[(1, 1)], epsilon = 1e-6);
    }

    #[test]
    fn projection_depth_range() {
        let (near, far) = (1.0f32, 100.0);
        let proj = projection_matrix(FRAC_PI_2, 1.0, near, far);

        let ndc_depth = |z: f32| {
            let clip = proj * vec4(0.0, 0.0, z, 1.0);
            clip.z / clip.w
        };

        assert_abs_diff_eq!(ndc_depth(-near), -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ndc_depth(-far), 1.0, epsilon = 1e-5);

        // Depth increases monotonically between the planes.
        assert!(ndc_depth(-near) < ndc_depth(-10.0));
        assert!(ndc_depth(-10.0) < ndc_depth(-far));
    }

    #[test]
    fn view_then_projection() {
        // A point straight ahead of the camera projects to the center of
        // the screen.
        let eye = vec3(4.0, 1.0, -2.0);
        let forward = vec3(0.5, -0.25, 1.0);
        let view = view_matrix(eye, forward, Vec3f::Y);
        let proj = projection_matrix(FRAC_PI_2, 1.0, 0.1, 100.0);

        let world = eye + forward.normalize() * 5.0;
        let clip = proj * (view * world.extend(1.0));
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(clip.w, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn works_for_f64() {
        let view = view_matrix(vec3(0.0f64, 0.0, 5.0), vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, 0.0));
        assert_eq!(view.column(3), vec4(0.0, 0.0, -5.0, 1.0));

        let proj = projection_matrix(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        assert_abs_diff_eq!(proj[(1, 1)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn uses_vec4_consts() {
        // The homogeneous row of a view matrix is always (0, 0, 0, 1).
        let view = view_matrix(vec3(1.0, 2.0, 3.0), vec3(0.3, 0.1, -1.0), Vec3f::Y);
        let homogeneous = vec4(view[(3, 0)], view[(3, 1)], view[(3, 2)], view[(3, 3)]);
        assert_eq!(homogeneous, Vec4f::W);
    }
}
