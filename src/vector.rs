use std::{array, fmt};

use crate::traits::{Number, Sqrt};
use crate::{One, Zero};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each
///   element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the
///   index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] and [`Vector::ONE`] hold all-zeroes and all-ones.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the unit
///   vectors along each axis.
/// - [`Vector::extend`] and [`Vector::truncate`] convert between widths.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`]
///   expose the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow
///   safe transmutation when the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original
    /// elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length
    /// `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of
    /// length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The length of `self` must be non-zero; normalizing a zero-length
    /// vector divides by zero and yields non-finite elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the
    /// relative angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the
    ///   vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`, following the right-hand rule: swapping the arguments
    /// inverts the direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
