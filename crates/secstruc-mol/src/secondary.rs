//! Secondary structure types
//!
//! Provides the eight-state DSSP classification and its three-state
//! reduction, together with the precedence order used during assignment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// DSSP secondary structure classification of a residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SecondaryStructureType {
    /// No regular structure
    #[default]
    Coil,
    /// High curvature at CA (kappa > 70 degrees)
    Bend,
    /// H-bonded turn not part of a helix
    Turn,
    /// Pi helix, i -> i+5 turns
    PiHelix,
    /// 3-10 helix, i -> i+3 turns
    ThreeTenHelix,
    /// Isolated beta bridge
    Bridge,
    /// Extended strand in a ladder
    Extended,
    /// Alpha helix, i -> i+4 turns
    AlphaHelix,
}

impl SecondaryStructureType {
    /// All types in ascending precedence
    pub const ALL: [SecondaryStructureType; 8] = [
        SecondaryStructureType::Coil,
        SecondaryStructureType::Bend,
        SecondaryStructureType::Turn,
        SecondaryStructureType::PiHelix,
        SecondaryStructureType::ThreeTenHelix,
        SecondaryStructureType::Bridge,
        SecondaryStructureType::Extended,
        SecondaryStructureType::AlphaHelix,
    ];

    /// Precedence of this type; a residue may only move to a higher rank
    #[inline]
    pub const fn rank(&self) -> u8 {
        match self {
            SecondaryStructureType::Coil => 0,
            SecondaryStructureType::Bend => 1,
            SecondaryStructureType::Turn => 2,
            SecondaryStructureType::PiHelix => 3,
            SecondaryStructureType::ThreeTenHelix => 4,
            SecondaryStructureType::Bridge => 5,
            SecondaryStructureType::Extended => 6,
            SecondaryStructureType::AlphaHelix => 7,
        }
    }

    #[inline]
    pub fn outranks(&self, other: SecondaryStructureType) -> bool {
        self.rank() > other.rank()
    }

    /// The higher-ranked of `self` and `candidate`
    #[inline]
    pub fn raised_to(self, candidate: SecondaryStructureType) -> SecondaryStructureType {
        if candidate.outranks(self) {
            candidate
        } else {
            self
        }
    }

    /// Alpha, 3-10 or pi helix
    #[inline]
    pub fn is_helix_type(&self) -> bool {
        matches!(
            self,
            SecondaryStructureType::AlphaHelix
                | SecondaryStructureType::ThreeTenHelix
                | SecondaryStructureType::PiHelix
        )
    }

    #[inline]
    pub fn is_strand_type(&self) -> bool {
        matches!(
            self,
            SecondaryStructureType::Extended | SecondaryStructureType::Bridge
        )
    }

    /// DSSP one-letter code, `' '` for coil
    pub fn one_letter(&self) -> char {
        match self {
            SecondaryStructureType::Coil => ' ',
            SecondaryStructureType::Bend => 'S',
            SecondaryStructureType::Turn => 'T',
            SecondaryStructureType::PiHelix => 'I',
            SecondaryStructureType::ThreeTenHelix => 'G',
            SecondaryStructureType::Bridge => 'B',
            SecondaryStructureType::Extended => 'E',
            SecondaryStructureType::AlphaHelix => 'H',
        }
    }

    /// Parse a DSSP one-letter code
    ///
    /// `' '`, `'-'`, `'C'` and anything unrecognised map to coil.
    pub fn from_char(c: char) -> Self {
        match c {
            'H' => SecondaryStructureType::AlphaHelix,
            'G' => SecondaryStructureType::ThreeTenHelix,
            'I' => SecondaryStructureType::PiHelix,
            'E' => SecondaryStructureType::Extended,
            'B' => SecondaryStructureType::Bridge,
            'T' => SecondaryStructureType::Turn,
            'S' => SecondaryStructureType::Bend,
            _ => SecondaryStructureType::Coil,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SecondaryStructureType::Coil => "coil",
            SecondaryStructureType::Bend => "bend",
            SecondaryStructureType::Turn => "turn",
            SecondaryStructureType::PiHelix => "pi-helix",
            SecondaryStructureType::ThreeTenHelix => "3-10-helix",
            SecondaryStructureType::Bridge => "beta-bridge",
            SecondaryStructureType::Extended => "extended",
            SecondaryStructureType::AlphaHelix => "alpha-helix",
        }
    }

    pub fn reduced(&self) -> ReducedSecondaryStructure {
        if self.is_helix_type() {
            ReducedSecondaryStructure::Helix
        } else if self.is_strand_type() {
            ReducedSecondaryStructure::Strand
        } else {
            ReducedSecondaryStructure::Coil
        }
    }
}

impl fmt::Display for SecondaryStructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}

impl From<char> for SecondaryStructureType {
    fn from(c: char) -> Self {
        SecondaryStructureType::from_char(c)
    }
}

impl From<SecondaryStructureType> for char {
    fn from(ss: SecondaryStructureType) -> Self {
        ss.one_letter()
    }
}

/// Three-state reduction: helix, strand, coil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReducedSecondaryStructure {
    Helix,
    Strand,
    #[default]
    Coil,
}

impl ReducedSecondaryStructure {
    pub fn one_letter(&self) -> char {
        match self {
            ReducedSecondaryStructure::Helix => 'H',
            ReducedSecondaryStructure::Strand => 'E',
            ReducedSecondaryStructure::Coil => 'C',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReducedSecondaryStructure::Helix => "helix",
            ReducedSecondaryStructure::Strand => "strand",
            ReducedSecondaryStructure::Coil => "coil",
        }
    }
}

impl fmt::Display for ReducedSecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}
