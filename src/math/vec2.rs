use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D vector with `f64` components. Used as both a point and a direction;
/// identity is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians (0 = +x axis).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length. Cheaper than `magnitude` for comparisons.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector normalizes to
    /// itself rather than producing NaN.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            self * (1.0 / mag)
        }
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Perpendicular vector (90 degrees counter-clockwise).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the vector by `angle` radians about the origin.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Signed angle from `self` to `other`, in (-pi, pi]. Positive means
    /// `other` lies counter-clockwise of `self`.
    pub fn angle_to(self, other: Self) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Vector projection of `self` onto `other`. A zero-length `other`
    /// yields the zero vector.
    pub fn project_onto(self, other: Self) -> Self {
        let denom = other.magnitude_squared();
        if denom == 0.0 {
            Self::ZERO
        } else {
            other * (self.dot(other) / denom)
        }
    }

    /// Component of `self` perpendicular to `other` (vector rejection).
    pub fn reject_from(self, other: Self) -> Self {
        self - self.project_onto(other)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_arithmetic_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, -2.0));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.dot(b) - 11.0).abs() < EPSILON);
        assert!((a.cross(b) - (-2.0)).abs() < EPSILON);
        // Perpendicular vectors: zero dot, full cross
        let p = a.perpendicular();
        assert!(a.dot(p).abs() < EPSILON);
        assert!((a.cross(p) - a.magnitude_squared()).abs() < EPSILON);
    }

    #[test]
    fn test_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(n.x, 0.6, epsilon = EPSILON);
        assert_relative_eq!(n.y, 0.8, epsilon = EPSILON);
        // Zero vector stays zero instead of going NaN
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < EPSILON);
        assert!((b.distance_squared(a) - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate() {
        let v = Vec2::new(1.0, 0.0);
        let r = v.rotate(FRAC_PI_2);
        assert!(r.x.abs() < EPSILON);
        assert!((r.y - 1.0).abs() < EPSILON);

        let half = v.rotate(PI);
        assert!((half.x + 1.0).abs() < EPSILON);
        assert!(half.y.abs() < EPSILON);
    }

    #[test]
    fn test_from_angle() {
        let v = Vec2::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < EPSILON);
        assert!((v.y - 1.0).abs() < EPSILON);
        assert_relative_eq!(Vec2::from_angle(1.23).magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_angle_to_signed() {
        let right = Vec2::new(1.0, 0.0);
        let up = Vec2::new(0.0, 1.0);
        assert_relative_eq!(right.angle_to(up), FRAC_PI_2, epsilon = EPSILON);
        assert_relative_eq!(up.angle_to(right), -FRAC_PI_2, epsilon = EPSILON);
        // Opposite direction lands on +pi, not -pi
        assert_relative_eq!(right.angle_to(Vec2::new(-1.0, 0.0)), PI, epsilon = EPSILON);
        assert_relative_eq!(right.angle_to(right), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_projection_and_rejection() {
        let v = Vec2::new(3.0, 4.0);
        let axis = Vec2::new(10.0, 0.0); // non-unit on purpose
        assert_eq!(v.project_onto(axis), Vec2::new(3.0, 0.0));
        assert_eq!(v.reject_from(axis), Vec2::new(0.0, 4.0));
        // Projection + rejection recompose the vector
        let axis2 = Vec2::new(1.0, 2.0);
        let recomposed = v.project_onto(axis2) + v.reject_from(axis2);
        assert_relative_eq!(recomposed.x, v.x, epsilon = EPSILON);
        assert_relative_eq!(recomposed.y, v.y, epsilon = EPSILON);
        // Degenerate axis
        assert_eq!(v.project_onto(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(v.reject_from(Vec2::ZERO), v);
    }
}
