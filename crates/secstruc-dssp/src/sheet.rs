//! Beta bridges, ladders and sheets
//!
//! Bridges are found from H-bond patterns between residue pairs, grouped
//! into ladders of consecutive bridges, joined across small bulges and
//! finally written back as `Extended` or `Bridge` classifications.

use serde::{Deserialize, Serialize};
use secstruc_mol::SecondaryStructureType;

use crate::hbond::is_bonded;
use crate::settings::DsspSettings;
use crate::state::ResidueState;

/// Strand direction of a bridge or ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeType {
    Parallel,
    Antiparallel,
}

/// A single beta bridge between two residues, `partner1 < partner2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetaBridge {
    pub partner1: usize,
    pub partner2: usize,
    pub bridge_type: BridgeType,
}

impl BetaBridge {
    pub fn new(a: usize, b: usize, bridge_type: BridgeType) -> Self {
        Self {
            partner1: a.min(b),
            partner2: a.max(b),
            bridge_type,
        }
    }

    /// The other residue of the bridge, if `index` takes part in it
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        if index == self.partner1 {
            Some(self.partner2)
        } else if index == self.partner2 {
            Some(self.partner1)
        } else {
            None
        }
    }
}

/// Run of consecutive bridges of one type
///
/// `from..=to` lies on the first strand, `lfrom..=lto` on the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    pub from: usize,
    pub to: usize,
    pub lfrom: usize,
    pub lto: usize,
    pub bridge_type: BridgeType,
    /// Later ladder joined to this one across a bulge
    pub connected_to: Option<usize>,
    /// Earlier ladder that joined this one
    pub connected_from: Option<usize>,
}

impl Ladder {
    fn from_bridge(bridge: &BetaBridge) -> Self {
        Self {
            from: bridge.partner1,
            to: bridge.partner1,
            lfrom: bridge.partner2,
            lto: bridge.partner2,
            bridge_type: bridge.bridge_type,
            connected_to: None,
            connected_from: None,
        }
    }

    /// Number of bridges in the ladder
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from + 1
    }

    #[inline]
    pub fn is_single_bridge(&self) -> bool {
        self.from == self.to
    }

    /// Whether `bridge` continues this ladder by one step
    fn extends_with(&self, bridge: &BetaBridge) -> bool {
        if bridge.bridge_type != self.bridge_type || bridge.partner1 != self.to + 1 {
            return false;
        }
        match self.bridge_type {
            BridgeType::Parallel => bridge.partner2 == self.lto + 1,
            BridgeType::Antiparallel => bridge.partner2 + 1 == self.lfrom,
        }
    }
}

// ============================================================================
// Bridges
// ============================================================================

fn bridge_type_at(states: &[ResidueState], i: usize, j: usize, settings: &DsspSettings) -> Option<BridgeType> {
    let bonded = |a: usize, b: usize| is_bonded(states, a, b, settings);

    if (bonded(i - 1, j) && bonded(j, i + 1)) || (bonded(j - 1, i) && bonded(i, j + 1)) {
        Some(BridgeType::Parallel)
    } else if (bonded(i, j) && bonded(j, i)) || (bonded(i - 1, j + 1) && bonded(j - 1, i + 1)) {
        Some(BridgeType::Antiparallel)
    } else {
        None
    }
}

/// Detect bridges among CA contact pairs and register them on both residues
///
/// `pairs` must hold `(i, j)` with `i < j`. Pairs closer than three residues
/// in sequence or touching a chain terminus cannot bridge.
pub fn find_bridges(
    pairs: &[(usize, usize)],
    states: &mut [ResidueState],
    settings: &DsspSettings,
) -> Vec<BetaBridge> {
    let len = states.len();
    let mut candidates: Vec<(usize, usize)> = pairs
        .iter()
        .copied()
        .filter(|&(i, j)| j >= i + 3 && i != 0 && j + 1 != len)
        .collect();
    candidates.sort_unstable();

    let mut bridges = Vec::new();
    for (i, j) in candidates {
        let Some(bridge_type) = bridge_type_at(states, i, j, settings) else {
            continue;
        };
        let bridge = BetaBridge::new(i, j, bridge_type);
        let stored_i = states[i].add_bridge(bridge);
        let stored_j = states[j].add_bridge(bridge);
        match (stored_i, stored_j) {
            (true, true) => {}
            (false, false) => log::warn!(
                "Residues {} and {} already have two bridges; dropping bridge {}-{} from their records",
                i,
                j,
                i,
                j
            ),
            (false, true) | (true, false) => log::warn!(
                "Residue {} already has two bridges; dropping bridge {}-{} from its record",
                if stored_i { j } else { i },
                i,
                j
            ),
        }
        bridges.push(bridge);
    }
    bridges
}

// ============================================================================
// Ladders
// ============================================================================

/// Group bridges, in detection order, into ladders
pub fn create_ladders(bridges: &[BetaBridge]) -> Vec<Ladder> {
    let mut ladders: Vec<Ladder> = Vec::new();
    for bridge in bridges {
        match ladders.iter_mut().find(|l| l.extends_with(bridge)) {
            Some(ladder) => {
                ladder.to += 1;
                match bridge.bridge_type {
                    BridgeType::Parallel => ladder.lto += 1,
                    BridgeType::Antiparallel => ladder.lfrom -= 1,
                }
            }
            None => ladders.push(Ladder::from_bridge(bridge)),
        }
    }
    ladders
}

fn has_bulge(l1: &Ladder, l2: &Ladder) -> bool {
    let gap = l2.from as isize - l1.to as isize;
    if l1.bridge_type != l2.bridge_type || gap >= 6 || l1.to >= l2.from || l2.connected_to.is_some() {
        return false;
    }

    let second_gap = match l1.bridge_type {
        BridgeType::Parallel => l2.lfrom as isize - l1.lto as isize,
        BridgeType::Antiparallel => l1.lfrom as isize - l2.lto as isize,
    };
    second_gap > 0 && ((second_gap < 6 && gap < 3) || second_gap < 3)
}

/// Link ladders separated by a bulge
///
/// Only later ladders are considered as targets; a ladder keeps one outgoing
/// connection, the last match found.
pub fn connect_ladders(ladders: &mut [Ladder]) {
    for i in 0..ladders.len() {
        for j in i..ladders.len() {
            if has_bulge(&ladders[i], &ladders[j]) {
                log::trace!("Ladders {} and {} joined across a bulge", i, j);
                ladders[i].connected_to = Some(j);
                ladders[j].connected_from = Some(i);
            }
        }
    }
}

// ============================================================================
// Sheets
// ============================================================================

/// Write ladder membership back into the residue classifications
pub fn update_sheets(ladders: &[Ladder], states: &mut [ResidueState]) {
    for ladder in ladders {
        for k in ladder.from..=ladder.to {
            let partner = ladder.lfrom + (k - ladder.from);
            if ladder.is_single_bridge() {
                for idx in [k, partner] {
                    let current = states[idx].sse;
                    if !current.is_helix_type() && current != SecondaryStructureType::Extended {
                        states[idx].raise(SecondaryStructureType::Bridge);
                    }
                }
            } else {
                states[k].raise(SecondaryStructureType::Extended);
                states[partner].raise(SecondaryStructureType::Extended);
            }
        }

        let Some(connected) = ladder.connected_to.and_then(|idx| ladders.get(idx)) else {
            continue;
        };
        let other_side = match ladder.bridge_type {
            BridgeType::Antiparallel => connected.lto..=ladder.lfrom,
            BridgeType::Parallel => ladder.lfrom..=connected.lto,
        };
        for idx in (ladder.from..=connected.to).chain(other_side) {
            states[idx].raise(SecondaryStructureType::Extended);
        }
    }
}
