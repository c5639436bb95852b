use crate::value::ValueType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValueError>;

/// An error converting between value types. The only failure mode in this
/// crate: a value of one type showed up where another type was required.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    /// Attempted to use a value of one type where another type was required
    #[error("Type error: expected {expected}, received {actual}")]
    Type {
        expected: ValueType,
        actual: ValueType,
    },
}
