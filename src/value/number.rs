use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

/// A numeric value: either an integer or a float. The distinction is
/// invisible to most callers; the two kinds compare and combine freely, with
/// integers promoted to floats whenever the two are mixed.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Not a Number
    pub const NAN: Self = Self::Float(f64::NAN);

    /// Is this number non-zero? `NaN` is considered zero
    pub fn to_bool(self) -> bool {
        match self {
            Number::Int(i) => i != 0,
            Number::Float(f) => f != 0.0,
        }
    }

    /// Convert to a float, losing int precision beyond 2^53
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(lhs), Self::Int(rhs)) => lhs == rhs,
            // Mixed comparisons promote the int, so 2 == 2.0
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(lhs), Self::Int(rhs)) => lhs.partial_cmp(rhs),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            // Int arithmetic wraps rather than overflowing
            (Number::Int(lhs), Number::Int(rhs)) => {
                lhs.wrapping_add(rhs).into()
            }
            _ => (self.to_f64() + rhs.to_f64()).into(),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => {
                lhs.wrapping_sub(rhs).into()
            }
            _ => (self.to_f64() - rhs.to_f64()).into(),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => {
                lhs.wrapping_mul(rhs).into()
            }
            _ => (self.to_f64() * rhs.to_f64()).into(),
        }
    }
}

impl Div for Number {
    type Output = Self;

    /// Division is always float division, so `7 / 2` is `3.5` and division
    /// by zero yields an infinity or `NaN` instead of panicking
    fn div(self, rhs: Self) -> Self::Output {
        (self.to_f64() / rhs.to_f64()).into()
    }
}

impl Rem for Number {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            // A zero divisor would panic in int arithmetic; the float path
            // turns it into NaN
            (Number::Int(lhs), Number::Int(rhs)) if rhs != 0 => {
                lhs.wrapping_rem(rhs).into()
            }
            _ => (self.to_f64() % rhs.to_f64()).into(),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Number::Int(i) => i.wrapping_neg().into(),
            Number::Float(f) => (-f).into(),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Self::Int(value.into())
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Self::Int(value.into())
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Self::Int(value.into())
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Self::Int(value.into())
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
