use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, StringError>;

/// Errors reported by the string search routines.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StringError {
    /// The requested modulus cannot bound a polynomial hash. A modulus
    /// of 0 is meaningless and a modulus of 1 collapses every hash to
    /// zero, so anything below 2 is rejected before scanning starts.
    #[error("invalid modulus {0}: must be at least 2")]
    InvalidModulus(u64),
}
