use std::fmt::{self, Display, Formatter};
use std::ops::Mul;

use derive_more::{Add, AddAssign, Neg, Sub, SubAssign};

/// A two dimensional vector of [`f64`] components. `Vector2D` is a `Copy` value type.
///
/// Supports addition, subtraction and negation, scaling by an [`f64`] from either side and the dot
/// product, written as `Vector2D * Vector2D`.
///
/// # Examples
/// ```
/// # use owned_array::geometry::Vector2D;
/// let a = Vector2D::new(1.0, 2.0);
/// let b = Vector2D::new(2.0, 0.5);
///
/// assert_eq!(a + b, Vector2D::new(3.0, 2.5));
/// assert_eq!(a * b, 3.0);
/// assert_eq!(2.0 * a, a * 2.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Add, Sub, Neg, AddAssign, SubAssign)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    /// The unit vector along the x axis.
    pub const UNIT_X: Vector2D = Vector2D::new(1.0, 0.0);
    /// The unit vector along the y axis.
    pub const UNIT_Y: Vector2D = Vector2D::new(0.0, 1.0);

    /// Creates a vector from its `x` and `y` components.
    pub const fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    /// Returns the x component.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the euclidean length of the vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns a reference to [`Vector2D::UNIT_X`].
    pub const fn unit_x() -> &'static Vector2D {
        &Self::UNIT_X
    }

    /// Returns a reference to [`Vector2D::UNIT_Y`].
    pub const fn unit_y() -> &'static Vector2D {
        &Self::UNIT_Y
    }
}

impl Mul for Vector2D {
    type Output = f64;

    /// The dot product of two vectors.
    fn mul(self, rhs: Vector2D) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Self::Output {
        rhs * self
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_construction() {
        let vec = Vector2D::default();
        assert_eq!((vec.x(), vec.y()), (0.0, 0.0));

        let vec = Vector2D::new(3.0, 0.0);
        assert_eq!(vec.x(), 3.0);
        assert_eq!(vec.y(), 0.0);

        assert_eq!(*Vector2D::unit_x(), Vector2D::new(1.0, 0.0));
        assert_eq!(*Vector2D::unit_y(), Vector2D::new(0.0, 1.0));
    }

    #[test]
    fn test_length() {
        assert!((Vector2D::new(1.0, 1.0).length() - 2.0_f64.sqrt()).abs() < EPSILON);
        assert!((Vector2D::new(3.0, 4.0).length() - 5.0).abs() < EPSILON);
        assert_eq!(Vector2D::UNIT_Y.length(), 1.0);
    }

    #[test]
    fn test_operators() {
        let vec1 = Vector2D::new(1.0, 2.0);
        let vec2 = Vector2D::new(2.0, 0.5);

        assert_eq!(vec1 + vec2, Vector2D::new(3.0, 2.5));
        assert_eq!(vec1 - vec2, Vector2D::new(-1.0, 1.5));
        assert_eq!(-vec1, Vector2D::new(-1.0, -2.0));
        assert_ne!(vec1, vec2);

        assert!((vec1 * vec2 - 3.0).abs() < EPSILON, "Vector * Vector should be the dot product.");
        assert_eq!(2.0 * vec1, Vector2D::new(2.0, 4.0));
        assert_eq!(vec1 * 2.0, Vector2D::new(2.0, 4.0));

        let mut vec = vec1;
        vec += vec2;
        vec -= Vector2D::UNIT_X;
        assert_eq!(vec, Vector2D::new(2.0, 2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2D::new(1.0, 2.0).to_string(), "Vector2D(1.0, 2.0)");
        assert_eq!(Vector2D::new(-0.5, 3.0).to_string(), "Vector2D(-0.5, 3.0)");
    }
}
