//! Residue data structure and amino acid tables
//!
//! A [`Residue`] owns its atoms. Backbone atoms are resolved by name on demand;
//! a residue may lack any of them.

use bitflags::bitflags;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::atom::{names, Atom};
use crate::error::{MolError, MolResult};
use crate::index::ResidueIndex;

/// The twenty canonical amino acids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    /// Non-standard or unrecognised residue
    #[default]
    Unknown,
}

// Common variants map onto their parent amino acid.
static THREE_LETTER: phf::Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Ala, "ARG" => AminoAcid::Arg, "ASN" => AminoAcid::Asn,
    "ASP" => AminoAcid::Asp, "CYS" => AminoAcid::Cys, "GLN" => AminoAcid::Gln,
    "GLU" => AminoAcid::Glu, "GLY" => AminoAcid::Gly, "HIS" => AminoAcid::His,
    "ILE" => AminoAcid::Ile, "LEU" => AminoAcid::Leu, "LYS" => AminoAcid::Lys,
    "MET" => AminoAcid::Met, "PHE" => AminoAcid::Phe, "PRO" => AminoAcid::Pro,
    "SER" => AminoAcid::Ser, "THR" => AminoAcid::Thr, "TRP" => AminoAcid::Trp,
    "TYR" => AminoAcid::Tyr, "VAL" => AminoAcid::Val,
    "HID" => AminoAcid::His, "HIE" => AminoAcid::His, "HIP" => AminoAcid::His,
    "HSD" => AminoAcid::His, "HSE" => AminoAcid::His, "HSP" => AminoAcid::His,
    "CYX" => AminoAcid::Cys, "MSE" => AminoAcid::Met,
};

impl AminoAcid {
    /// Look up a three-letter code, case-insensitive
    pub fn from_three_letter(code: &str) -> Option<Self> {
        THREE_LETTER
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    pub fn from_one_letter(code: char) -> Option<Self> {
        let aa = match code.to_ascii_uppercase() {
            'A' => AminoAcid::Ala,
            'R' => AminoAcid::Arg,
            'N' => AminoAcid::Asn,
            'D' => AminoAcid::Asp,
            'C' => AminoAcid::Cys,
            'Q' => AminoAcid::Gln,
            'E' => AminoAcid::Glu,
            'G' => AminoAcid::Gly,
            'H' => AminoAcid::His,
            'I' => AminoAcid::Ile,
            'L' => AminoAcid::Leu,
            'K' => AminoAcid::Lys,
            'M' => AminoAcid::Met,
            'F' => AminoAcid::Phe,
            'P' => AminoAcid::Pro,
            'S' => AminoAcid::Ser,
            'T' => AminoAcid::Thr,
            'W' => AminoAcid::Trp,
            'Y' => AminoAcid::Tyr,
            'V' => AminoAcid::Val,
            _ => return None,
        };
        Some(aa)
    }

    /// Parse a three-letter code, reporting unknown codes as an error
    pub fn parse(code: &str) -> MolResult<Self> {
        Self::from_three_letter(code).ok_or_else(|| MolError::UnknownAminoAcid(code.to_string()))
    }

    /// One-letter code, 'X' for unknown residues
    pub fn one_letter(&self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
            AminoAcid::Unknown => 'X',
        }
    }

    /// Proline has no amide hydrogen and never donates a backbone H-bond
    #[inline]
    pub fn is_proline(&self) -> bool {
        *self == AminoAcid::Pro
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}

bitflags! {
    /// Which backbone atoms a residue carries
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BackboneAtoms: u8 {
        const N = 0x01;
        const CA = 0x02;
        const C = 0x04;
        const O = 0x08;
        const H = 0x10;

        /// N, CA, C and O: enough to take part in every pass
        const HEAVY = Self::N.bits() | Self::CA.bits() | Self::C.bits() | Self::O.bits();
    }
}

impl BackboneAtoms {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.contains(BackboneAtoms::HEAVY)
    }
}

/// A residue of a protein chain
#[derive(Debug, Clone)]
pub struct Residue {
    /// Position in the owning chain, assigned by [`crate::Chain::push`]
    pub index: ResidueIndex,
    /// Author residue number; informational only
    pub number: i32,
    /// Insertion code (' ' for none)
    pub insertion_code: char,
    pub amino_acid: AminoAcid,
    atoms: SmallVec<[Atom; 8]>,
}

impl Residue {
    pub fn new(amino_acid: AminoAcid, number: i32) -> Self {
        Self {
            index: ResidueIndex::invalid(),
            number,
            insertion_code: ' ',
            amino_acid,
            atoms: SmallVec::new(),
        }
    }

    /// Builder-style atom attachment
    pub fn with_atom(mut self, atom: Atom) -> Self {
        self.add_atom(atom);
        self
    }

    /// Attach an atom, replacing any existing atom with the same name
    pub fn add_atom(&mut self, atom: Atom) {
        match self.atoms.iter_mut().find(|a| a.name == atom.name) {
            Some(existing) => *existing = atom,
            None => self.atoms.push(atom),
        }
    }

    /// Remove every reconstructed atom, returning how many were removed
    pub fn remove_virtual_atoms(&mut self) -> usize {
        let before = self.atoms.len();
        self.atoms.retain(|a| !a.is_virtual);
        before - self.atoms.len()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.is_named(name))
    }

    #[inline]
    pub fn n(&self) -> Option<&Atom> {
        self.atom(names::N)
    }

    #[inline]
    pub fn ca(&self) -> Option<&Atom> {
        self.atom(names::CA)
    }

    #[inline]
    pub fn c(&self) -> Option<&Atom> {
        self.atom(names::C)
    }

    #[inline]
    pub fn o(&self) -> Option<&Atom> {
        self.atom(names::O)
    }

    #[inline]
    pub fn h(&self) -> Option<&Atom> {
        self.atom(names::H)
    }

    /// Backbone atoms present on this residue
    pub fn backbone(&self) -> BackboneAtoms {
        let mut mask = BackboneAtoms::empty();
        for atom in &self.atoms {
            mask |= match atom.name.as_str() {
                names::N => BackboneAtoms::N,
                names::CA => BackboneAtoms::CA,
                names::C => BackboneAtoms::C,
                names::O => BackboneAtoms::O,
                names::H => BackboneAtoms::H,
                _ => BackboneAtoms::empty(),
            };
        }
        mask
    }

    pub fn has_virtual_atoms(&self) -> bool {
        self.atoms.iter().any(|a| a.is_virtual)
    }
}
