use thiserror::Error;

/// Error types
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Number of atoms should be positive")]
    NoAtoms,
    #[error("Skin width should be non-negative, found {0}")]
    NegativeSkin(f64),
    #[error("Cutoff distance should be positive, found {0}")]
    InvalidCutoff(f64),
    #[error("Atom type {type_} is out of range for {num_types} types")]
    InvalidType { type_: usize, num_types: usize },
    #[error("Invalid pair parameters: {0}")]
    InvalidParameters(String),
    #[error("Pair cutoff {pair} should not exceed the global cutoff {global}")]
    PairCutoffTooLarge { pair: f64, global: f64 },
    #[error("Box length {length} should be larger than the extended cutoff {extended_cutoff}")]
    BoxTooSmall { length: f64, extended_cutoff: f64 },
    #[error("Expected {expected} entries, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
