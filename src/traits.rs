use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0; f32, f64);

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unsigned integers qualify; operations that need negation bound on
/// [`Signed`] instead.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// A [`Number`] with an additive inverse.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

impl Trig for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }
}

impl Trig for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }
}

/// Angle values that can be converted between degrees and radians.
pub trait Angle {
    /// Reinterprets `self` as degrees and converts it to radians.
    fn to_radians(self) -> Self;
    /// Reinterprets `self` as radians and converts it to degrees.
    fn to_degrees(self) -> Self;
}

impl Angle for f32 {
    fn to_radians(self) -> Self {
        self.to_radians()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }
}

impl Angle for f64 {
    fn to_radians(self) -> Self {
        self.to_radians()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }
}

/// Types whose values can be rounded towards zero.
///
/// This is the identity on integers. It exists so that the `%` operator on
/// [`Vector`][crate::Vector] can use truncating-division semantics
/// (`a - b * trunc(a / b)`) for floating-point scalars as well.
pub trait Trunc {
    fn trunc(self) -> Self;
}

macro_rules! int_trunc {
    ($($types:ty),+) => {
        $(
            impl Trunc for $types {
                fn trunc(self) -> Self {
                    self
                }
            }
        )+
    };
}
int_trunc!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Trunc for f32 {
    fn trunc(self) -> Self {
        self.trunc()
    }
}
impl Trunc for f64 {
    fn trunc(self) -> Self {
        self.trunc()
    }
}
