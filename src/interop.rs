//! Conversions to and from [`mint`] types.
//!
//! [`mint`] is the graphics ecosystem's interchange format; these impls let
//! callers hand vectors and matrices to other math libraries without this
//! crate depending on any of them. Nothing outside this module touches
//! `mint`.

use mint::IntoMint;

use crate::{vec2, vec3, vec4, Mat4, Matrix, Vec2, Vec3, Vec4};

impl<T> From<mint::Vector2<T>> for Vec2<T> {
    fn from(v: mint::Vector2<T>) -> Self {
        vec2(v.x, v.y)
    }
}

impl<T> From<Vec2<T>> for mint::Vector2<T> {
    fn from(v: Vec2<T>) -> Self {
        let [x, y] = v.into_array();
        Self { x, y }
    }
}

impl<T> IntoMint for Vec2<T> {
    type MintType = mint::Vector2<T>;
}

impl<T> From<mint::Vector3<T>> for Vec3<T> {
    fn from(v: mint::Vector3<T>) -> Self {
        vec3(v.x, v.y, v.z)
    }
}

impl<T> From<Vec3<T>> for mint::Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        let [x, y, z] = v.into_array();
        Self { x, y, z }
    }
}

impl<T> IntoMint for Vec3<T> {
    type MintType = mint::Vector3<T>;
}

impl<T> From<mint::Vector4<T>> for Vec4<T> {
    fn from(v: mint::Vector4<T>) -> Self {
        vec4(v.x, v.y, v.z, v.w)
    }
}

impl<T> From<Vec4<T>> for mint::Vector4<T> {
    fn from(v: Vec4<T>) -> Self {
        let [x, y, z, w] = v.into_array();
        Self { x, y, z, w }
    }
}

impl<T> IntoMint for Vec4<T> {
    type MintType = mint::Vector4<T>;
}

impl<T: Copy> From<Mat4<T>> for mint::ColumnMatrix4<T> {
    fn from(m: Mat4<T>) -> Self {
        Self {
            x: m.column(0).into(),
            y: m.column(1).into(),
            z: m.column(2).into(),
            w: m.column(3).into(),
        }
    }
}

impl<T> From<mint::ColumnMatrix4<T>> for Mat4<T> {
    fn from(m: mint::ColumnMatrix4<T>) -> Self {
        Matrix::from_columns([
            Vec4::from(m.x),
            Vec4::from(m.y),
            Vec4::from(m.z),
            Vec4::from(m.w),
        ])
    }
}

impl<T: Copy> IntoMint for Mat4<T> {
    type MintType = mint::ColumnMatrix4<T>;
}

#[cfg(test)]
mod tests {
    use crate::{Mat4f, Vec3f};

    use super::*;

    #[test]
    fn vector_round_trip() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let m: mint::Vector3<f32> = v.into();
        assert_eq!(m, mint::Vector3 { x: 1.0, y: 2.0, z: 3.0 });
        assert_eq!(Vec3f::from(m), v);
    }

    #[test]
    fn matrix_columns_are_preserved() {
        let mat = Mat4f::from_columns([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let m: mint::ColumnMatrix4<f32> = mat.into();
        assert_eq!(m.y, mint::Vector4 { x: 5.0, y: 6.0, z: 7.0, w: 8.0 });
        assert_eq!(Mat4f::from(m), mat);
    }
}
