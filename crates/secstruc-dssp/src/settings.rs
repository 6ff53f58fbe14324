//! Assignment settings
//!
//! Defaults reproduce the published Kabsch-Sander parameters.

use serde::{Deserialize, Serialize};

/// Electrostatic coupling constant (0.42 e * 0.20 e * 332 * 1000), cal/mol * Angstrom
pub const HBOND_Q: f64 = -27888.0;

/// Settings for DSSP secondary structure assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsspSettings {
    /// CA-CA distance cutoff for H-bond and bridge candidates (Angstrom)
    pub ca_cutoff: f64,
    /// Any donor/acceptor atom pair closer than this saturates the energy (Angstrom)
    pub min_atom_distance: f64,
    /// Lowest possible H-bond energy (cal/mol)
    pub hbond_low_energy: f64,
    /// A bond is formed when its energy is strictly below this value (cal/mol)
    pub hbond_high_energy: f64,
    /// Longest C-N distance still treated as a peptide bond (Angstrom)
    pub max_peptide_bond_length: f64,
    /// Kappa above which a residue is a bend (degrees)
    pub bend_min_kappa: f64,
    /// Use DSSP helix boundaries. When false, helices and turns also take
    /// the residue before the first and after the last H-bonded turn.
    pub dssp_helices: bool,
    /// Keep a snapshot of all classifications after every pass
    pub record_passes: bool,
}

impl Default for DsspSettings {
    fn default() -> Self {
        Self {
            ca_cutoff: 9.0,
            min_atom_distance: 0.5,
            hbond_low_energy: -9900.0,
            hbond_high_energy: -500.0,
            max_peptide_bond_length: 2.5,
            bend_min_kappa: 70.0,
            dssp_helices: true,
            record_passes: false,
        }
    }
}

impl DsspSettings {
    #[inline]
    pub fn ca_cutoff_squared(&self) -> f64 {
        self.ca_cutoff * self.ca_cutoff
    }

    #[inline]
    pub fn max_peptide_bond_length_squared(&self) -> f64 {
        self.max_peptide_bond_length * self.max_peptide_bond_length
    }
}
