//! Kabsch-Sander (DSSP) secondary structure assignment
//!
//! Classifies every residue of a protein chain from backbone coordinates
//! alone, using electrostatic backbone H-bonds, the CA bend angle and
//! beta-bridge patterns.
//!
//! - [`assign_secondary_structure`] - assign one [`Chain`](secstruc_mol::Chain)
//! - [`assign_chains`] - assign independent chains in parallel
//! - [`DsspSettings`] - energy and distance thresholds
//! - [`DsspAssignment`] - per-residue [`ResidueState`] plus bridges and ladders
//!
//! # Example
//!
//! ```rust
//! use secstruc_dssp::{assign_secondary_structure, DsspSettings};
//! use secstruc_mol::{AminoAcid, Atom, Chain, Residue};
//! use lin_alg::f64::Vec3;
//!
//! let mut chain = Chain::new("A");
//! for i in 0..4 {
//!     let x = 3.8 * i as f64;
//!     let mut residue = Residue::new(AminoAcid::Gly, i + 1);
//!     residue.add_atom(Atom::from_name("N", Vec3::new(x - 0.5, 0.8, 0.0)));
//!     residue.add_atom(Atom::from_name("CA", Vec3::new(x, 0.0, 0.0)));
//!     residue.add_atom(Atom::from_name("C", Vec3::new(x + 1.5, 0.3, 0.0)));
//!     residue.add_atom(Atom::from_name("O", Vec3::new(x + 1.8, 1.4, 0.0)));
//!     chain.push(residue);
//! }
//!
//! let assignment = assign_secondary_structure(&chain, &DsspSettings::default()).unwrap();
//! assert_eq!(assignment.len(), 4);
//! assert_eq!(assignment.reduced_string(), "CCCC");
//! ```

mod assign;
pub mod bend;
mod error;
pub mod hbond;
pub mod helix;
pub mod segment;
mod settings;
pub mod sheet;
mod state;
pub mod torsion;

pub use assign::{
    assign_chains, assign_secondary_structure, DsspAssignment, DsspPass, PassSnapshot,
};
pub use error::{DsspError, DsspResult};
pub use hbond::{HBond, HBondPair};
pub use segment::SecondaryStructureSegment;
pub use settings::{DsspSettings, HBOND_Q};
pub use sheet::{BetaBridge, BridgeType, Ladder};
pub use state::{ResidueState, TurnMarker, UNDEFINED_ANGLE};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::assign::{assign_chains, assign_secondary_structure, DsspAssignment};
    pub use crate::error::{DsspError, DsspResult};
    pub use crate::settings::DsspSettings;
    pub use crate::state::ResidueState;
    pub use secstruc_mol::prelude::*;
}
