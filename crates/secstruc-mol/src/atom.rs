//! Atom data structure
//!
//! An atom belongs to exactly one residue and carries its own coordinate.
//! Coordinates are kept in double precision: the hydrogen-bond energy is a
//! difference of inverse distances and is sensitive to rounding.

use lin_alg::f64::Vec3;

use crate::element::Element;

/// Backbone atom names used to resolve the peptide backbone
pub mod names {
    pub const N: &str = "N";
    pub const CA: &str = "CA";
    pub const C: &str = "C";
    pub const O: &str = "O";
    pub const H: &str = "H";
}

/// A single atom with its position
#[derive(Debug, Clone)]
pub struct Atom {
    /// Atom name (e.g. "CA", "N")
    pub name: String,
    pub element: Element,
    /// Cartesian coordinate in Angstrom
    pub coord: Vec3,
    /// Reconstructed rather than observed
    pub is_virtual: bool,
}

impl Atom {
    /// Create a new observed atom
    pub fn new(name: impl Into<String>, element: Element, coord: Vec3) -> Self {
        Self {
            name: name.into(),
            element,
            coord,
            is_virtual: false,
        }
    }

    /// Create an atom, guessing the element from its name
    pub fn from_name(name: impl Into<String>, coord: Vec3) -> Self {
        let name = name.into();
        let element = Element::from_atom_name(&name);
        Self::new(name, element, coord)
    }

    /// Create a reconstructed atom
    pub fn new_virtual(name: impl Into<String>, element: Element, coord: Vec3) -> Self {
        Self {
            is_virtual: true,
            ..Self::new(name, element, coord)
        }
    }

    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
