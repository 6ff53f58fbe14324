//! Per-residue assignment state
//!
//! One [`ResidueState`] is created per residue before the first pass. Passes
//! only ever raise the classification through [`ResidueState::raise`].

use serde::{Deserialize, Serialize};
use secstruc_mol::SecondaryStructureType;

use crate::hbond::HBondPair;
use crate::sheet::BetaBridge;

/// Torsion and kappa value for "not computed"
pub const UNDEFINED_ANGLE: f64 = 360.0;

/// Marker in one cell of a residue's turn array
///
/// Cell `n - 3` records the i -> i+n turns the residue takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnMarker {
    #[default]
    Blank,
    /// `>`: CO of this residue accepts a bond from NH of residue i+n
    Open,
    /// `<`: NH of this residue donates to CO of residue i-n
    Close,
    /// `X`: both opens and closes an n-turn
    Both,
    /// Residue lies strictly inside an n-turn
    Interior(u8),
}

impl TurnMarker {
    /// Combine the marker already in a cell with a newly detected one
    ///
    /// `Both` is terminal. An opening meeting a closing becomes `Both`;
    /// otherwise an existing opening or closing wins over anything new.
    pub fn merged(self, incoming: TurnMarker) -> TurnMarker {
        match (self, incoming) {
            (TurnMarker::Both, _) => TurnMarker::Both,
            (TurnMarker::Open, TurnMarker::Close) | (TurnMarker::Close, TurnMarker::Open) => {
                TurnMarker::Both
            }
            (TurnMarker::Open, _) | (TurnMarker::Close, _) => self,
            _ => incoming,
        }
    }

    /// `>` or `X`
    #[inline]
    pub fn starts_turn(&self) -> bool {
        matches!(self, TurnMarker::Open | TurnMarker::Both)
    }

    pub fn to_char(&self) -> char {
        match self {
            TurnMarker::Blank => ' ',
            TurnMarker::Open => '>',
            TurnMarker::Close => '<',
            TurnMarker::Both => 'X',
            TurnMarker::Interior(n) => char::from(b'0' + n % 10),
        }
    }
}

/// Assignment state of one residue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidueState {
    pub sse: SecondaryStructureType,
    /// Virtual bond angle at CA in degrees, 360 when undefined
    pub kappa: f64,
    pub phi: f64,
    pub psi: f64,
    pub omega: f64,
    /// Turn markers for n = 3, 4, 5
    pub turn: [TurnMarker; 3],
    pub bend: bool,
    /// Bonds from CO of the partner to NH of this residue
    pub accept: HBondPair,
    /// Bonds from CO of this residue to NH of the partner
    pub donor: HBondPair,
    pub bridges: [Option<BetaBridge>; 2],
}

impl Default for ResidueState {
    fn default() -> Self {
        Self {
            sse: SecondaryStructureType::Coil,
            kappa: UNDEFINED_ANGLE,
            phi: UNDEFINED_ANGLE,
            psi: UNDEFINED_ANGLE,
            omega: UNDEFINED_ANGLE,
            turn: [TurnMarker::Blank; 3],
            bend: false,
            accept: HBondPair::default(),
            donor: HBondPair::default(),
            bridges: [None, None],
        }
    }
}

impl ResidueState {
    /// Raise the classification to `candidate` if it ranks higher
    #[inline]
    pub fn raise(&mut self, candidate: SecondaryStructureType) {
        self.sse = self.sse.raised_to(candidate);
    }

    /// Marker for turns of length `n` (3, 4 or 5)
    #[inline]
    pub fn turn_marker(&self, n: usize) -> TurnMarker {
        self.turn[n - 3]
    }

    pub(crate) fn mark_turn(&mut self, n: usize, marker: TurnMarker) {
        let cell = &mut self.turn[n - 3];
        *cell = cell.merged(marker);
    }

    /// Store a bridge in a free slot
    ///
    /// Returns `false` when both slots already hold other bridges.
    pub fn add_bridge(&mut self, bridge: BetaBridge) -> bool {
        for slot in &mut self.bridges {
            match slot {
                Some(existing) if *existing == bridge => return true,
                Some(_) => continue,
                None => {
                    *slot = Some(bridge);
                    return true;
                }
            }
        }
        false
    }

    pub fn bridges(&self) -> impl Iterator<Item = &BetaBridge> {
        self.bridges.iter().flatten()
    }

    /// Turn markers for n = 3, 4, 5 as three characters
    pub fn turn_string(&self) -> String {
        self.turn.iter().map(TurnMarker::to_char).collect()
    }
}
