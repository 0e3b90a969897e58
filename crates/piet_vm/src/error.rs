use thiserror::Error;

/// Errors that can occur while building the pieces the executor runs on.
///
/// None of these are ever raised by a running program: a malformed stack
/// operation or a division by zero is a no-op (see [`crate::stack::Stack`]),
/// not an error. This type only covers construction-time failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VmError {
    #[error("grid buffer length {got} does not match width*height {expected}")]
    SizeMismatch { expected: usize, got: usize },
    #[error("grid dimensions must be non-zero")]
    EmptyGrid,
}
