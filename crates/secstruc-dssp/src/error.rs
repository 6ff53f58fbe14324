//! Error types for secondary-structure assignment

use thiserror::Error;

/// Errors that abort an assignment
///
/// Missing backbone atoms on individual residues are not errors: the affected
/// pass skips the residue and assignment continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DsspError {
    /// Chain has no residues
    #[error("Chain '{chain}' has no residues")]
    EmptyChain { chain: String },

    /// No residue of the chain carries a CA atom
    #[error("Chain '{chain}' has no resolvable CA coordinates")]
    NoResolvableCoordinates { chain: String },
}

/// Result type for assignment operations
pub type DsspResult<T> = Result<T, DsspError>;
