//! Protein chain container
//!
//! A chain is an ordered list of residues. Array position is the residue
//! index used by every distance and offset rule; author numbering does not
//! affect adjacency.

use crate::error::{MolError, MolResult};
use crate::index::ResidueIndex;
use crate::residue::Residue;

/// An ordered chain of residues
#[derive(Debug, Clone, Default)]
pub struct Chain {
    /// Chain identifier (e.g. "A")
    pub id: String,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: Vec::new(),
        }
    }

    pub fn with_capacity(id: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            residues: Vec::with_capacity(capacity),
        }
    }

    /// Append a residue, assigning it the next sequence index
    pub fn push(&mut self, mut residue: Residue) -> ResidueIndex {
        let index = ResidueIndex::from(self.residues.len());
        residue.index = index;
        self.residues.push(residue);
        index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Residue> {
        self.residues.get_mut(index)
    }

    /// Checked lookup by typed index
    pub fn residue(&self, index: ResidueIndex) -> MolResult<&Residue> {
        self.residues
            .get(index.as_usize())
            .ok_or_else(|| MolError::residue_out_of_bounds(index.0, self.residues.len()))
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Residue> {
        self.residues.iter()
    }

    /// One-letter amino acid sequence
    pub fn sequence(&self) -> String {
        self.residues.iter().map(|r| r.amino_acid.one_letter()).collect()
    }

    /// Remove reconstructed atoms from every residue, returning the total removed
    pub fn strip_virtual_atoms(&mut self) -> usize {
        self.residues
            .iter_mut()
            .map(Residue::remove_virtual_atoms)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Residue;
    type IntoIter = std::slice::Iter<'a, Residue>;

    fn into_iter(self) -> Self::IntoIter {
        self.residues.iter()
    }
}

impl FromIterator<Residue> for Chain {
    fn from_iter<I: IntoIterator<Item = Residue>>(iter: I) -> Self {
        let mut chain = Chain::new("A");
        for residue in iter {
            chain.push(residue);
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::element::Element;
    use crate::residue::AminoAcid;
    use lin_alg::f64::Vec3;

    #[test]
    fn test_push_assigns_index() {
        let mut chain = Chain::new("A");
        let first = chain.push(Residue::new(AminoAcid::Met, 10));
        let second = chain.push(Residue::new(AminoAcid::Lys, 42));
        assert_eq!(first.as_usize(), 0);
        assert_eq!(second.as_usize(), 1);
        assert_eq!(chain.get(1).map(|r| r.index), Some(second));
        assert_eq!(chain.sequence(), "MK");
    }

    #[test]
    fn test_residue_out_of_bounds() {
        let chain = Chain::new("A");
        assert_eq!(
            chain.residue(ResidueIndex::new(3)).unwrap_err(),
            MolError::ResidueIndexOutOfBounds(3, 0)
        );
    }

    #[test]
    fn test_strip_virtual_atoms() {
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let mut chain: Chain = (0..3)
            .map(|i| {
                Residue::new(AminoAcid::Ala, i)
                    .with_atom(Atom::from_name("N", origin))
                    .with_atom(Atom::new_virtual("H", Element::Hydrogen, origin))
            })
            .collect();
        assert_eq!(chain.strip_virtual_atoms(), 3);
        assert!(chain.iter().all(|r| !r.has_virtual_atoms()));
        assert_eq!(chain.strip_virtual_atoms(), 0);
    }
}
