use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("q + r + s must equal zero, got ({q}, {r}, {s})")]
    InvariantViolation { q: i32, r: i32, s: i32 },
}

/// Cube coordinate of a hex on an unbounded grid. Always satisfies
/// `q + r + s == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    q: i32,
    r: i32,
    s: i32,
}

#[derive(Deserialize)]
struct RawCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.q, raw.r, raw.s)
    }
}

impl Coordinate {
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, CoordError> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(CoordError::InvariantViolation { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    pub const fn origin() -> Self {
        Self { q: 0, r: 0, s: 0 }
    }

    /// `s` is derived, so this cannot fail.
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }
    pub fn r(&self) -> i32 {
        self.r
    }
    pub fn s(&self) -> i32 {
        self.s
    }

    /// Panics on `i32` overflow in debug builds; see [`Coordinate::checked_add`].
    pub fn add(self, other: Coordinate) -> Coordinate {
        Coordinate {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        }
    }

    /// Panics on `i32` overflow in debug builds; see [`Coordinate::checked_subtract`].
    pub fn subtract(self, other: Coordinate) -> Coordinate {
        Coordinate {
            q: self.q - other.q,
            r: self.r - other.r,
            s: self.s - other.s,
        }
    }

    /// Panics on `i32` overflow in debug builds; see [`Coordinate::checked_scale`].
    pub fn scale(self, k: i32) -> Coordinate {
        Coordinate {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }

    /// `None` if any component overflows.
    pub fn checked_add(self, other: Coordinate) -> Option<Coordinate> {
        Some(Coordinate {
            q: self.q.checked_add(other.q)?,
            r: self.r.checked_add(other.r)?,
            s: self.s.checked_add(other.s)?,
        })
    }

    pub fn checked_subtract(self, other: Coordinate) -> Option<Coordinate> {
        Some(Coordinate {
            q: self.q.checked_sub(other.q)?,
            r: self.r.checked_sub(other.r)?,
            s: self.s.checked_sub(other.s)?,
        })
    }

    pub fn checked_scale(self, k: i32) -> Option<Coordinate> {
        Some(Coordinate {
            q: self.q.checked_mul(k)?,
            r: self.r.checked_mul(k)?,
            s: self.s.checked_mul(k)?,
        })
    }

    /// Number of hex steps between `self` and `other`.
    pub fn distance(&self, other: &Coordinate) -> u32 {
        let d = self.subtract(*other);
        (d.q.unsigned_abs() + d.r.unsigned_abs() + d.s.unsigned_abs()) / 2
    }
}

impl Add for Coordinate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coordinate::add(self, other)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Self;

    #[inline]
    fn mul(self, k: i32) -> Self {
        self.scale(k)
    }
}

impl Neg for Coordinate {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.scale(-1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(q: i32, r: i32, s: i32) -> Coordinate {
        Coordinate::new(q, r, s).unwrap()
    }

    #[test]
    fn construction_checks_invariant() {
        let ok = Coordinate::new(1, -1, 0).unwrap();
        assert_eq!((ok.q(), ok.r(), ok.s()), (1, -1, 0));
        assert_eq!(
            Coordinate::new(1, 1, 0),
            Err(CoordError::InvariantViolation { q: 1, r: 1, s: 0 })
        );
    }

    #[test]
    fn construction_at_integer_extremes() {
        let wide = Coordinate::new(i32::MAX, 1, i32::MIN).unwrap();
        assert_eq!((wide.q(), wide.r(), wide.s()), (i32::MAX, 1, i32::MIN));
        assert!(Coordinate::new(i32::MIN, i32::MAX, 1).is_ok());
        assert!(Coordinate::new(0, i32::MAX, -i32::MAX).is_ok());

        assert_eq!(
            Coordinate::new(i32::MAX, i32::MAX, 0),
            Err(CoordError::InvariantViolation { q: i32::MAX, r: i32::MAX, s: 0 })
        );
        assert!(Coordinate::new(i32::MIN, i32::MIN, i32::MIN).is_err());
        assert!(Coordinate::new(i32::MAX, i32::MAX, i32::MAX).is_err());
        assert!(Coordinate::new(i32::MIN, 0, i32::MAX).is_err());
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let edge = c(i32::MAX, 0, -i32::MAX);
        let step = c(1, -1, 0);
        assert_eq!(edge.checked_add(step), None);
        assert_eq!(edge.checked_subtract(-step), None);
        assert_eq!(edge.checked_scale(2), None);
        assert_eq!(step.checked_add(step), Some(c(2, -2, 0)));
        assert_eq!(step.checked_subtract(step), Some(Coordinate::origin()));
        assert_eq!(step.checked_scale(-3), Some(c(-3, 3, 0)));
    }

    #[test]
    fn origin_and_axial() {
        assert_eq!(Coordinate::origin(), Coordinate::default());
        assert_eq!(Coordinate::origin(), c(0, 0, 0));
        assert_eq!(Coordinate::from_axial(2, -5), c(2, -5, 3));
    }

    #[test]
    fn arithmetic_returns_new_values() {
        let a = c(1, -1, 0);
        let b = c(-2, 3, -1);
        assert_eq!(a.add(b), c(-1, 2, -1));
        assert_eq!(a.subtract(b), c(3, -4, 1));
        assert_eq!(b.scale(3), c(-6, 9, -3));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(b * -2, b.scale(-2));
        assert_eq!(-a, c(-1, 1, 0));
        // operands untouched
        assert_eq!(a, c(1, -1, 0));
        assert_eq!(b, c(-2, 3, -1));
    }

    #[test]
    fn arithmetic_keeps_invariant() {
        let samples = [c(0, 0, 0), c(1, -1, 0), c(-3, 7, -4), c(5, 0, -5)];
        for a in samples {
            for b in samples {
                for k in -3..=3 {
                    for v in [a + b, a - b, a * k] {
                        assert_eq!(v.q() + v.r() + v.s(), 0);
                    }
                }
            }
        }
    }

    #[test]
    fn distance_counts_steps() {
        assert_eq!(c(0, 0, 0).distance(&c(0, 0, 0)), 0);
        assert_eq!(c(0, 0, 0).distance(&c(1, -1, 0)), 1);
        assert_eq!(c(0, 0, 0).distance(&c(3, -1, -2)), 3);
        assert_eq!(c(-2, 1, 1).distance(&c(2, -1, -1)), 4);
    }

    #[test]
    fn usable_as_map_key() {
        let mut set = std::collections::HashSet::new();
        set.insert(c(1, -1, 0));
        set.insert(c(1, -1, 0));
        set.insert(c(0, 1, -1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_rejects_broken_invariant() {
        let json = serde_json::to_string(&c(2, -3, 1)).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c(2, -3, 1));
        assert!(serde_json::from_str::<Coordinate>(r#"{"q":1,"r":1,"s":0}"#).is_err());
        assert!(
            serde_json::from_str::<Coordinate>(r#"{"q":2147483647,"r":2147483647,"s":0}"#).is_err()
        );
        let wide: Coordinate =
            serde_json::from_str(r#"{"q":2147483647,"r":1,"s":-2147483648}"#).unwrap();
        assert_eq!(wide.s(), i32::MIN);
    }

    #[test]
    fn display() {
        assert_eq!(c(1, 0, -1).to_string(), "(1, 0, -1)");
    }
}
