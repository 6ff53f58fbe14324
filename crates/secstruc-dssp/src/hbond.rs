//! Backbone hydrogen bonds
//!
//! Implements the Kabsch-Sander electrostatic H-bond model. Each residue
//! keeps the two lowest-energy bonds in each direction so that bifurcated
//! bonds are represented.
//!
//! Amide hydrogens missing from the input are reconstructed into a scratch
//! [`BackboneFrame`] list. The caller's chain is never modified.

use lin_alg::f64::Vec3;
use serde::{Deserialize, Serialize};
use secstruc_mol::geometry::{distance, unit};
use secstruc_mol::{Chain, Residue};

use crate::settings::{DsspSettings, HBOND_Q};
use crate::state::ResidueState;

// ============================================================================
// Backbone frames
// ============================================================================

/// Backbone coordinates of one residue, resolved once per assignment
#[derive(Debug, Clone, Copy, Default)]
pub struct BackboneFrame {
    pub n: Option<Vec3>,
    pub ca: Option<Vec3>,
    pub c: Option<Vec3>,
    pub o: Option<Vec3>,
    /// Amide hydrogen, observed or reconstructed
    pub h: Option<Vec3>,
    pub h_is_virtual: bool,
    pub is_proline: bool,
}

impl BackboneFrame {
    pub fn from_residue(residue: &Residue) -> Self {
        Self {
            n: residue.n().map(|a| a.coord),
            ca: residue.ca().map(|a| a.coord),
            c: residue.c().map(|a| a.coord),
            o: residue.o().map(|a| a.coord),
            h: residue.h().map(|a| a.coord),
            h_is_virtual: false,
            is_proline: residue.amino_acid.is_proline(),
        }
    }
}

/// Place the amide hydrogen of `current` from the carbonyl of `previous`
///
/// H = N(i+1) + unit(C(i) - O(i)), i.e. 1 Angstrom from N opposite the C=O.
pub fn virtual_hydrogen(previous: &BackboneFrame, current: &BackboneFrame) -> Option<Vec3> {
    let c = previous.c?;
    let o = previous.o?;
    let n = current.n?;
    unit(c - o).map(|dir| n + dir)
}

/// Resolve backbone coordinates for every residue and fill in missing amide hydrogens
pub fn resolve_backbone(chain: &Chain) -> Vec<BackboneFrame> {
    let mut frames: Vec<BackboneFrame> = chain.iter().map(BackboneFrame::from_residue).collect();

    for i in 1..frames.len() {
        if frames[i].h.is_some() {
            continue;
        }
        match virtual_hydrogen(&frames[i - 1], &frames[i]) {
            Some(h) => {
                frames[i].h = Some(h);
                frames[i].h_is_virtual = true;
            }
            None => log::debug!(
                "Chain {}: cannot place amide hydrogen on residue {}",
                chain.id,
                i
            ),
        }
    }

    frames
}

// ============================================================================
// Bond records
// ============================================================================

/// One H-bond slot: energy and partner residue
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HBond {
    /// Energy in cal/mol; 0 for an empty slot
    pub energy: f64,
    pub partner: Option<usize>,
}

impl HBond {
    #[inline]
    pub fn new(energy: f64, partner: usize) -> Self {
        Self {
            energy,
            partner: Some(partner),
        }
    }

    /// Bond to `partner` with energy below `threshold`
    #[inline]
    pub fn is_formed_with(&self, partner: usize, threshold: f64) -> bool {
        self.partner == Some(partner) && self.energy < threshold
    }
}

/// Best two bonds in one direction, lowest energy first
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HBondPair {
    pub first: HBond,
    pub second: HBond,
}

impl HBondPair {
    /// Offer a bond; returns the pair with it inserted if it beats either slot
    #[must_use]
    pub fn insert(self, energy: f64, partner: usize) -> HBondPair {
        let bond = HBond::new(energy, partner);
        if energy < self.first.energy {
            HBondPair {
                first: bond,
                second: self.first,
            }
        } else if energy < self.second.energy {
            HBondPair {
                first: self.first,
                second: bond,
            }
        } else {
            self
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HBond> {
        [&self.first, &self.second].into_iter()
    }

    pub fn has_formed_with(&self, partner: usize, threshold: f64) -> bool {
        self.iter().any(|b| b.is_formed_with(partner, threshold))
    }
}

// ============================================================================
// Energy
// ============================================================================

/// Electrostatic energy of the bond N-H(donor) ... O=C(acceptor) in cal/mol
///
/// Returns `None` when the donor is a proline or either side lacks a needed
/// atom. Any pair of the four atoms closer than `min_atom_distance` gives the
/// floor energy.
pub fn hbond_energy(
    donor: &BackboneFrame,
    acceptor: &BackboneFrame,
    settings: &DsspSettings,
) -> Option<f64> {
    if donor.is_proline {
        return None;
    }
    let n = donor.n?;
    let h = donor.h?;
    let c = acceptor.c?;
    let o = acceptor.o?;

    let dno = distance(o, n);
    let dhc = distance(c, h);
    let dho = distance(o, h);
    let dnc = distance(c, n);

    let min = settings.min_atom_distance;
    if dno < min || dhc < min || dho < min || dnc < min {
        return Some(settings.hbond_low_energy);
    }

    let energy = HBOND_Q / dho - HBOND_Q / dhc + HBOND_Q / dnc - HBOND_Q / dno;
    Some(energy.max(settings.hbond_low_energy))
}

/// Evaluate NH(donor) -> CO(acceptor) and record it on both residues
fn check_add_hbond(
    frames: &[BackboneFrame],
    states: &mut [ResidueState],
    donor: usize,
    acceptor: usize,
    settings: &DsspSettings,
) {
    let Some(energy) = hbond_energy(&frames[donor], &frames[acceptor], settings) else {
        return;
    };
    if energy < settings.hbond_high_energy {
        log::trace!("H-bond N-H {} -> O=C {}: {:.1} cal/mol", donor, acceptor, energy);
    }
    states[donor].accept = states[donor].accept.insert(energy, acceptor);
    states[acceptor].donor = states[acceptor].donor.insert(energy, donor);
}

/// Compute H-bonds for all CA contact pairs
///
/// `pairs` holds `(i, j)` with `i < j`. Both directions are evaluated except
/// the peptide-bonded NH(i+1) -> CO(i), whose electrostatic term is
/// meaningless.
pub fn calculate_hbonds(
    frames: &[BackboneFrame],
    pairs: &[(usize, usize)],
    states: &mut [ResidueState],
    settings: &DsspSettings,
) {
    for &(i, j) in pairs {
        check_add_hbond(frames, states, i, j, settings);
        if j != i + 1 {
            check_add_hbond(frames, states, j, i, settings);
        }
    }
}

/// Whether CO of residue `i` is H-bonded to NH of residue `j`
pub fn is_bonded(states: &[ResidueState], i: usize, j: usize, settings: &DsspSettings) -> bool {
    let (Some(si), Some(sj)) = (states.get(i), states.get(j)) else {
        return false;
    };
    let threshold = settings.hbond_high_energy;
    si.donor.has_formed_with(j, threshold) || sj.accept.has_formed_with(i, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(n: Vec3, h: Vec3, c: Vec3, o: Vec3) -> BackboneFrame {
        BackboneFrame {
            n: Some(n),
            ca: None,
            c: Some(c),
            o: Some(o),
            h: Some(h),
            h_is_virtual: false,
            is_proline: false,
        }
    }

    /// Donor NH pointing along +x at an acceptor C=O pointing back at it
    fn linear_pair(gap: f64) -> (BackboneFrame, BackboneFrame) {
        let donor = frame(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(-10.0, 1.0, 0.0),
        );
        let acceptor = frame(
            Vec3::new(20.0, 0.0, 0.0),
            Vec3::new(20.0, 1.0, 0.0),
            Vec3::new(1.0 + gap + 1.23, 0.0, 0.0),
            Vec3::new(1.0 + gap, 0.0, 0.0),
        );
        (donor, acceptor)
    }

    #[test]
    fn test_pair_insert_order() {
        let pair = HBondPair::default()
            .insert(-1000.0, 4)
            .insert(-2000.0, 7)
            .insert(-1500.0, 9);
        assert_eq!(pair.first, HBond::new(-2000.0, 7));
        assert_eq!(pair.second, HBond::new(-1500.0, 9));
    }

    #[test]
    fn test_pair_insert_rejects_weaker() {
        let pair = HBondPair::default().insert(-3000.0, 1).insert(-2500.0, 2);
        assert_eq!(pair.insert(-100.0, 3), pair);
        assert_eq!(pair.insert(50.0, 3), pair);
    }

    #[test]
    fn test_pair_formed_with() {
        let pair = HBondPair::default().insert(-400.0, 2).insert(-900.0, 5);
        assert!(pair.has_formed_with(5, -500.0));
        assert!(!pair.has_formed_with(2, -500.0));
        assert!(!pair.has_formed_with(3, -500.0));
    }

    #[test]
    fn test_energy_linear_bond() {
        let settings = DsspSettings::default();
        let (donor, acceptor) = linear_pair(1.9);
        let energy = hbond_energy(&donor, &acceptor, &settings).unwrap();
        // N-H...O=C in line with H...O = 1.9 is a strong bond
        assert!(energy < -2000.0, "energy {energy}");
        assert!(energy > settings.hbond_low_energy);
    }

    #[test]
    fn test_energy_distant_is_weak() {
        let settings = DsspSettings::default();
        let (donor, acceptor) = linear_pair(8.0);
        let energy = hbond_energy(&donor, &acceptor, &settings).unwrap();
        assert!(energy > settings.hbond_high_energy, "energy {energy}");
    }

    #[test]
    fn test_energy_close_contact() {
        let settings = DsspSettings::default();
        let (donor, acceptor) = linear_pair(0.2);
        assert_eq!(hbond_energy(&donor, &acceptor, &settings), Some(-9900.0));
    }

    #[test]
    fn test_energy_skips_proline_and_missing_atoms() {
        let settings = DsspSettings::default();
        let (mut donor, acceptor) = linear_pair(1.9);
        donor.is_proline = true;
        assert_eq!(hbond_energy(&donor, &acceptor, &settings), None);

        let (mut donor, acceptor) = linear_pair(1.9);
        donor.h = None;
        assert_eq!(hbond_energy(&donor, &acceptor, &settings), None);
    }

    #[test]
    fn test_virtual_hydrogen_placement() {
        let previous = BackboneFrame {
            c: Some(Vec3::new(0.0, 0.0, 0.0)),
            o: Some(Vec3::new(0.0, 1.23, 0.0)),
            ..Default::default()
        };
        let current = BackboneFrame {
            n: Some(Vec3::new(1.33, 0.0, 0.0)),
            ..Default::default()
        };
        let h = virtual_hydrogen(&previous, &current).unwrap();
        assert!((h.x - 1.33).abs() < 1e-9);
        assert!((h.y + 1.0).abs() < 1e-9);
        assert!(virtual_hydrogen(&BackboneFrame::default(), &current).is_none());
    }

    #[test]
    fn test_calculate_hbonds_records_both_sides() {
        let settings = DsspSettings::default();
        let (donor, acceptor) = linear_pair(1.9);
        let frames = [donor, BackboneFrame::default(), acceptor];
        let mut states = vec![ResidueState::default(); 3];

        calculate_hbonds(&frames, &[(0, 2)], &mut states, &settings);

        assert_eq!(states[0].accept.first.partner, Some(2));
        assert_eq!(states[2].donor.first.partner, Some(0));
        assert!(is_bonded(&states, 2, 0, &settings));
        assert!(!is_bonded(&states, 0, 2, &settings));
        assert!(!is_bonded(&states, 0, 9, &settings));
    }
}
