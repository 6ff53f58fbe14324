//! Type-safe index wrappers
//!
//! Residues are addressed by their position in the owning chain. The newtype
//! keeps that position from being confused with a biological residue number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invalid index marker value
pub const INVALID_INDEX: u32 = u32::MAX;

macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $debug_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Position as usize, suitable for slice indexing
            #[inline]
            pub const fn as_usize(&self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn is_valid(&self) -> bool {
                self.0 != INVALID_INDEX
            }

            #[inline]
            pub const fn invalid() -> Self {
                $name(INVALID_INDEX)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::invalid()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $debug_name, self.0)
                } else {
                    write!(f, "{}(INVALID)", $debug_name)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}", self.0)
                } else {
                    write!(f, "INVALID")
                }
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                $name(index as u32)
            }
        }
    };
}

define_index!(
    /// Sequence position of a residue within its chain (0-based)
    ResidueIndex,
    "ResidueIndex"
);
