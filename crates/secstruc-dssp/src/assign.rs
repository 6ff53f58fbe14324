//! Secondary structure assignment for one chain
//!
//! Runs the Kabsch-Sander passes in order:
//!
//! 1. Resolve backbone atoms and place missing amide hydrogens
//! 2. H-bond energies for CA contact pairs
//! 3. phi/psi/omega
//! 4. n-turns, helix promotion, residual turns
//! 5. Bends
//! 6. Bridges, ladders, bulges and sheets
//!
//! Every pass may only raise a residue's classification.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use secstruc_mol::spatial::contact_pairs;
use secstruc_mol::{Chain, ReducedSecondaryStructure, SecondaryStructureType};

use crate::bend::detect_bends;
use crate::error::{DsspError, DsspResult};
use crate::hbond::{calculate_hbonds, resolve_backbone};
use crate::helix::{calculate_turns, mark_turns, promote_helices};
use crate::segment::{segment_at, segments, SecondaryStructureSegment};
use crate::settings::DsspSettings;
use crate::sheet::{connect_ladders, create_ladders, find_bridges, update_sheets, BetaBridge, Ladder};
use crate::state::ResidueState;
use crate::torsion::calculate_dihedral_angles;

/// Passes that can change classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DsspPass {
    Initial,
    Helices,
    Turns,
    Bends,
    Strands,
}

/// Classifications of all residues right after a pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassSnapshot {
    pub pass: DsspPass,
    pub types: Vec<SecondaryStructureType>,
}

/// Result of assigning one chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsspAssignment {
    pub chain_id: String,
    /// Per-residue state, indexed like the chain
    pub states: Vec<ResidueState>,
    pub bridges: Vec<BetaBridge>,
    pub ladders: Vec<Ladder>,
    /// Number of amide hydrogens reconstructed for this run
    pub virtual_hydrogens: usize,
    /// Filled only when [`DsspSettings::record_passes`] is set
    pub passes: Vec<PassSnapshot>,
}

impl DsspAssignment {
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<&ResidueState> {
        self.states.get(index)
    }

    pub fn types(&self) -> Vec<SecondaryStructureType> {
        self.states.iter().map(|s| s.sse).collect()
    }

    pub fn reduced(&self) -> Vec<ReducedSecondaryStructure> {
        self.states.iter().map(|s| s.sse.reduced()).collect()
    }

    /// DSSP one-letter string, coil as `' '`
    pub fn one_letter_string(&self) -> String {
        self.states.iter().map(|s| s.sse.one_letter()).collect()
    }

    /// Three-state string over `H`, `E` and `C`
    pub fn reduced_string(&self) -> String {
        self.states.iter().map(|s| s.sse.reduced().one_letter()).collect()
    }

    /// Residue count per type, in ascending rank order
    pub fn counts(&self) -> Vec<(SecondaryStructureType, usize)> {
        SecondaryStructureType::ALL
            .iter()
            .map(|&t| (t, self.states.iter().filter(|s| s.sse == t).count()))
            .collect()
    }

    /// One-line description such as `A: 16 residues, 10 alpha-helix, 6 coil`
    pub fn summary(&self) -> String {
        let mut out = format!("{}: {} residues", self.chain_id, self.len());
        for (t, count) in self.counts().into_iter().rev() {
            if count > 0 {
                out.push_str(&format!(", {} {}", count, t.name()));
            }
        }
        out
    }

    /// Element of identical reduced state surrounding `index`
    pub fn element_at(&self, index: usize) -> Option<SecondaryStructureSegment> {
        segment_at(&self.reduced(), index)
    }

    pub fn elements(&self) -> Vec<SecondaryStructureSegment> {
        segments(&self.reduced())
    }
}

fn snapshot(passes: &mut Vec<PassSnapshot>, pass: DsspPass, states: &[ResidueState], settings: &DsspSettings) {
    if settings.record_passes {
        passes.push(PassSnapshot {
            pass,
            types: states.iter().map(|s| s.sse).collect(),
        });
    }
}

/// Assign secondary structure to every residue of `chain`
///
/// The chain is only read; reconstructed hydrogens live in scratch storage.
/// Residues missing backbone atoms are skipped by the passes that need them.
///
/// # Errors
///
/// [`DsspError::EmptyChain`] for a chain without residues and
/// [`DsspError::NoResolvableCoordinates`] when no residue has a CA atom.
pub fn assign_secondary_structure(chain: &Chain, settings: &DsspSettings) -> DsspResult<DsspAssignment> {
    if chain.is_empty() {
        return Err(DsspError::EmptyChain {
            chain: chain.id.clone(),
        });
    }

    // 1. Backbone frames with amide hydrogens
    let frames = resolve_backbone(chain);
    if frames.iter().all(|f| f.ca.is_none()) {
        return Err(DsspError::NoResolvableCoordinates {
            chain: chain.id.clone(),
        });
    }
    let virtual_hydrogens = frames.iter().filter(|f| f.h_is_virtual).count();

    let mut states = vec![ResidueState::default(); frames.len()];
    let mut passes = Vec::new();
    snapshot(&mut passes, DsspPass::Initial, &states, settings);

    // 2. H-bonds over CA contacts
    let ca: Vec<_> = frames.iter().map(|f| f.ca).collect();
    let pairs = contact_pairs(&ca, settings.ca_cutoff);
    calculate_hbonds(&frames, &pairs, &mut states, settings);

    // 3. Torsions
    calculate_dihedral_angles(&frames, &mut states);

    // 4. Turns and helices
    calculate_turns(&mut states, settings);
    promote_helices(&mut states, settings);
    snapshot(&mut passes, DsspPass::Helices, &states, settings);
    mark_turns(&mut states, settings);
    snapshot(&mut passes, DsspPass::Turns, &states, settings);

    // 5. Bends
    detect_bends(&frames, &mut states, settings);
    snapshot(&mut passes, DsspPass::Bends, &states, settings);

    // 6. Strands
    let bridges = find_bridges(&pairs, &mut states, settings);
    let mut ladders = create_ladders(&bridges);
    connect_ladders(&mut ladders);
    update_sheets(&ladders, &mut states);
    snapshot(&mut passes, DsspPass::Strands, &states, settings);

    let assignment = DsspAssignment {
        chain_id: chain.id.clone(),
        states,
        bridges,
        ladders,
        virtual_hydrogens,
        passes,
    };
    log::debug!(
        "{} ({} contact pairs, {} virtual hydrogens)",
        assignment.summary(),
        pairs.len(),
        virtual_hydrogens
    );
    Ok(assignment)
}

/// Assign every chain independently, in parallel
///
/// Results are returned in input order.
pub fn assign_chains(chains: &[Chain], settings: &DsspSettings) -> Vec<DsspResult<DsspAssignment>> {
    chains
        .par_iter()
        .map(|chain| assign_secondary_structure(chain, settings))
        .collect()
}
