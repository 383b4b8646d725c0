//! 2D vector type for directions, normals and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (z-component of the 3D cross product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit-length copy, or `None` for the zero vector.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Returns this vector rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Returns this vector rotated counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotate(self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Signed angle in radians that rotates `self` onto `other`, in `[-pi, pi]`.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        self.cross(other).atan2(self.dot(other))
    }

    /// Reflects this vector about a unit `normal`.
    ///
    /// Computes `self - 2 * (self . normal) * normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        let two = F::one() + F::one();
        self - normal * (two * self.dot(normal))
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_and_cross() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec2::new(3.0_f64, 4.0).normalize().unwrap();
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-12);
        assert!(Vec2::<f64>::zero().normalize().is_none());
    }

    #[test]
    fn test_perpendicular() {
        let v: Vec2<f64> = Vec2::new(1.0, 0.0);
        let p = v.perpendicular();
        assert_eq!(p, Vec2::new(0.0, 1.0));
        assert_eq!(v.dot(p), 0.0);
    }

    #[test]
    fn test_reflect() {
        // Falling onto a floor whose normal points up.
        let d: Vec2<f64> = Vec2::new(1.0, -1.0);
        let r = d.reflect(Vec2::new(0.0, 1.0));
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);

        // Reflection preserves length.
        let d: Vec2<f64> = Vec2::new(0.3, -2.0);
        let n = Vec2::new(1.0, 1.0).normalize().unwrap();
        assert_relative_eq!(d.reflect(n).magnitude(), d.magnitude(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate() {
        let v = Vec2::new(1.0_f64, 0.0);
        let quarter = v.rotate(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(quarter.y, 1.0, epsilon = 1e-12);

        let back = Vec2::new(-1.0_f64, 0.0).rotate(-std::f64::consts::FRAC_PI_4);
        assert_relative_eq!(back.x, -0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(back.y, 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_to() {
        let x = Vec2::new(1.0_f64, 0.0);
        let y = Vec2::new(0.0, 2.0);
        assert_relative_eq!(x.angle_to(y), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(y.angle_to(x), -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(x.angle_to(x * 3.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}
