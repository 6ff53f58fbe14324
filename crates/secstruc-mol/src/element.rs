//! Chemical element definitions
//!
//! Only the elements that make up protein structures are modelled. Anything
//! else parses to [`Element::Unknown`] through the lenient constructor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MolError, MolResult};

/// Chemical element of an atom, keyed by atomic number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Element {
    #[default]
    Unknown = 0,
    /// Hydrogen (atomic number 1)
    Hydrogen = 1,
    /// Carbon (atomic number 6)
    Carbon = 6,
    /// Nitrogen (atomic number 7)
    Nitrogen = 7,
    /// Oxygen (atomic number 8)
    Oxygen = 8,
    /// Sulfur (atomic number 16)
    Sulfur = 16,
    /// Selenium (atomic number 34)
    Selenium = 34,
}

impl Element {
    /// Look up an element by symbol, case-insensitive
    ///
    /// Deuterium is folded into hydrogen.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        let element = match symbol.to_ascii_uppercase().as_str() {
            "H" | "D" => Element::Hydrogen,
            "C" => Element::Carbon,
            "N" => Element::Nitrogen,
            "O" => Element::Oxygen,
            "S" => Element::Sulfur,
            "SE" => Element::Selenium,
            _ => return None,
        };
        Some(element)
    }

    /// Like [`Element::from_symbol`], but reports unknown symbols as an error
    pub fn parse(symbol: &str) -> MolResult<Self> {
        Self::from_symbol(symbol).ok_or_else(|| MolError::InvalidElement(symbol.to_string()))
    }

    /// Guess the element from a PDB-style atom name ("CA" is carbon, "OXT" is oxygen)
    pub fn from_atom_name(name: &str) -> Self {
        match name.trim().chars().next() {
            Some(c) => Self::from_symbol(&c.to_string()).unwrap_or_default(),
            None => Element::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Unknown => "X",
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Sulfur => "S",
            Element::Selenium => "Se",
        }
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
