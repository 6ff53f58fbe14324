//! Error types for chain and residue operations

use thiserror::Error;

/// Errors that can occur when building or querying a protein chain
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MolError {
    /// Three-letter or one-letter residue code is not a known amino acid
    #[error("Unknown amino acid code: {0}")]
    UnknownAminoAcid(String),

    /// Invalid element symbol
    #[error("Invalid element symbol: {0}")]
    InvalidElement(String),

    /// Residue index is out of bounds
    #[error("Residue index {0} is out of bounds (len: {1})")]
    ResidueIndexOutOfBounds(u32, usize),
}

impl MolError {
    /// Create a residue out of bounds error
    pub fn residue_out_of_bounds(index: u32, len: usize) -> Self {
        MolError::ResidueIndexOutOfBounds(index, len)
    }
}

/// Result type for chain operations
pub type MolResult<T> = Result<T, MolError>;
