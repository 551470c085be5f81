//! Crate error type.

use thiserror::Error;

/// Errors reported by pixmap construction.
///
/// Rasterization itself never fails: degenerate numerics are absorbed
/// inline and out-of-range regions are clipped silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The supplied buffer length does not match `width * height`.
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
