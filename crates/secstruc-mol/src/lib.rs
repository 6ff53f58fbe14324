//! Protein chain data structures for secondary-structure assignment
//!
//! This crate provides the structural model consumed by `secstruc-dssp`:
//!
//! - [`Atom`], [`Element`] - atoms with double-precision coordinates
//! - [`Residue`], [`AminoAcid`] - residues owning their atoms, with backbone accessors
//! - [`Chain`] - ordered, index-addressable residues
//! - [`SecondaryStructureType`] - DSSP classification with its precedence order
//! - [`geometry`] - distances, angles and torsions
//! - [`spatial`] - CA proximity grid
//!
//! # Example
//!
//! ```rust
//! use secstruc_mol::{Atom, AminoAcid, Chain, Residue};
//! use lin_alg::f64::Vec3;
//!
//! let mut chain = Chain::new("A");
//! let residue = Residue::new(AminoAcid::Gly, 1)
//!     .with_atom(Atom::from_name("N", Vec3::new(0.0, 0.0, 0.0)))
//!     .with_atom(Atom::from_name("CA", Vec3::new(1.458, 0.0, 0.0)));
//! let idx = chain.push(residue);
//!
//! assert_eq!(idx.as_usize(), 0);
//! assert!(chain.get(0).and_then(|r| r.ca()).is_some());
//! ```

mod atom;
mod chain;
mod element;
mod error;
pub mod geometry;
mod index;
mod residue;
mod secondary;
pub mod spatial;

pub use atom::{names as atom_names, Atom};
pub use chain::Chain;
pub use element::Element;
pub use error::{MolError, MolResult};
pub use index::{ResidueIndex, INVALID_INDEX};
pub use residue::{AminoAcid, BackboneAtoms, Residue};
pub use secondary::{ReducedSecondaryStructure, SecondaryStructureType};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::atom::Atom;
    pub use crate::chain::Chain;
    pub use crate::element::Element;
    pub use crate::error::{MolError, MolResult};
    pub use crate::index::ResidueIndex;
    pub use crate::residue::{AminoAcid, Residue};
    pub use crate::secondary::{ReducedSecondaryStructure, SecondaryStructureType};
}

#[cfg(test)]
mod tests {
    use super::*;
    use lin_alg::f64::Vec3;

    #[test]
    fn test_build_dipeptide() {
        let mut chain = Chain::new("A");
        for (aa, number) in [(AminoAcid::Ala, 1), (AminoAcid::Gly, 2)] {
            let mut residue = Residue::new(aa, number);
            for name in ["N", "CA", "C", "O"] {
                residue.add_atom(Atom::from_name(name, Vec3::new(number as f64, 0.0, 0.0)));
            }
            chain.push(residue);
        }

        assert_eq!(chain.len(), 2);
        assert!(chain.iter().all(|r| r.backbone().is_complete()));
        assert_eq!(chain.sequence(), "AG");
    }

    #[test]
    fn test_element_lookup() {
        assert_eq!(Element::from_symbol("C"), Some(Element::Carbon));
        assert_eq!(Element::Carbon.symbol(), "C");
    }
}
