//! Turns and helices
//!
//! An n-turn at i is an H-bond from CO(i) to NH(i+n). Two consecutive
//! n-turns at i-1 and i make residues i..i+n-1 an n-helix. Helices are
//! promoted in the order alpha (n=4), 3-10 (n=3), pi (n=5); opening turns
//! that did not become helices are marked as turns afterwards.

use secstruc_mol::SecondaryStructureType;

use crate::hbond::is_bonded;
use crate::settings::DsspSettings;
use crate::state::{ResidueState, TurnMarker};

/// Turn lengths in detection order
pub const TURN_LENGTHS: [usize; 3] = [3, 4, 5];

/// Helix promotion order with the helix type each turn length produces
const HELIX_ORDER: [(usize, SecondaryStructureType); 3] = [
    (4, SecondaryStructureType::AlphaHelix),
    (3, SecondaryStructureType::ThreeTenHelix),
    (5, SecondaryStructureType::PiHelix),
];

/// Fill the turn marker arrays from the H-bond table
pub fn calculate_turns(states: &mut [ResidueState], settings: &DsspSettings) {
    let len = states.len();
    for i in 0..len {
        for n in TURN_LENGTHS {
            if i + n >= len || !is_bonded(states, i, i + n, settings) {
                continue;
            }
            log::trace!("{}-turn at ({}, {})", n, i, i + n);
            states[i].mark_turn(n, TurnMarker::Open);
            states[i + n].mark_turn(n, TurnMarker::Close);
            for state in &mut states[i + 1..i + n] {
                state.mark_turn(n, TurnMarker::Interior(n as u8));
            }
        }
    }
}

/// Promote consecutive n-turns to alpha, 3-10 and pi helices
pub fn promote_helices(states: &mut [ResidueState], settings: &DsspSettings) {
    for (n, helix) in HELIX_ORDER {
        check_set_helix(states, n, helix, settings);
    }
}

fn check_set_helix(
    states: &mut [ResidueState],
    n: usize,
    helix: SecondaryStructureType,
    settings: &DsspSettings,
) {
    let len = states.len();
    let mut promoted = 0usize;
    for i in 1..len.saturating_sub(n) {
        // Leave residues already claimed by a higher-ranked structure alone
        if states[i].sse.outranks(helix) || states[i + 1].sse.outranks(helix) {
            continue;
        }
        if !(states[i - 1].turn_marker(n).starts_turn() && states[i].turn_marker(n).starts_turn()) {
            continue;
        }

        for state in &mut states[i..i + n] {
            state.raise(helix);
        }
        if !settings.dssp_helices {
            states[i - 1].raise(helix);
            states[i + n].raise(helix);
        }
        promoted += 1;
    }
    log::debug!("{} helix: {} positions promoted", helix.name(), promoted);
}

/// Mark residues inside every opening n-turn as `Turn`
///
/// Runs after helix promotion, so helix residues keep their higher rank.
pub fn mark_turns(states: &mut [ResidueState], settings: &DsspSettings) {
    let len = states.len();
    for n in TURN_LENGTHS {
        for i in 0..len.saturating_sub(1) {
            if !states[i].turn_marker(n).starts_turn() {
                continue;
            }
            for state in &mut states[i + 1..i + n] {
                state.raise(SecondaryStructureType::Turn);
            }
            if !settings.dssp_helices {
                states[i].raise(SecondaryStructureType::Turn);
                states[i + n].raise(SecondaryStructureType::Turn);
            }
        }
    }
}
