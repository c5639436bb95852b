//! Macros for implementing traits on various types

/// Implement a numeric binary operator for [Value]
macro_rules! impl_value_numeric_binary_op {
    ($trait:ident, $func:ident, $op:tt) => {
        impl $trait for Value {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                match (self.to_number(), rhs.to_number()) {
                    (Some(lhs), Some(rhs)) => (lhs $op rhs).into(),
                    _ => Number::NAN.into(),
                }
            }
        }
    };
}

/// Implement `From<T>` for `Value`, where `T` is convertible to a particular
/// `Value` variant.
macro_rules! impl_value_from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for $crate::Value {
            fn from(value: $type) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

/// Unpack a [Value] of a known variant, or return a type error
macro_rules! ensure_type {
    ($value:expr, $variant:ident) => {
        if let $crate::Value::$variant(value) = $value {
            value
        } else {
            return Err($crate::error::ValueError::Type {
                expected: $crate::ValueType::$variant,
                actual: $value.type_(),
            });
        }
    };
}

/// Implement `TryFrom<Value>` for a type `T` that a particular variant
/// converts into. The conversion fails iff the value has the wrong variant.
macro_rules! impl_value_try_from {
    ($type:ty, $variant:ident) => {
        impl TryFrom<$crate::Value> for $type {
            type Error = $crate::error::ValueError;

            fn try_from(
                value: $crate::Value,
            ) -> Result<Self, Self::Error> {
                let value =
                    $crate::value::macros::ensure_type!(value, $variant);
                Ok(value.into())
            }
        }
    };
}

/// Implement two complementary conversions for a type `T`, where `T` maps to
/// a particular variant (e.g. the `bool` type and the `Boolean` variant):
/// - `From<T> for Value`
/// - `TryFrom<Value> for T`, which fails when the value has the wrong
///   variant
macro_rules! impl_value_conversions {
    ($type:ty, $variant:ident) => {
        $crate::value::macros::impl_value_from!($type, $variant);
        $crate::value::macros::impl_value_try_from!($type, $variant);
    };
}

pub(crate) use ensure_type;
pub(crate) use impl_value_conversions;
pub(crate) use impl_value_from;
pub(crate) use impl_value_numeric_binary_op;
pub(crate) use impl_value_try_from;
