//! Secondary structure elements
//!
//! Splits a three-state assignment into maximal runs of identical state and
//! answers "which element surrounds residue i, and how deep inside it is".

use serde::{Deserialize, Serialize};
use secstruc_mol::ReducedSecondaryStructure;

/// Maximal run of residues sharing one reduced state, `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryStructureSegment {
    pub kind: ReducedSecondaryStructure,
    pub start: usize,
    pub end: usize,
}

impl SecondaryStructureSegment {
    #[inline]
    pub fn size(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Distance of `index` to the nearer end of the segment, 0 at either end
    pub fn terminus_distance(&self, index: usize) -> Option<usize> {
        self.contains(index)
            .then(|| (index - self.start).min(self.end - index))
    }
}

/// Split a reduced assignment into segments, in sequence order
pub fn segments(reduced: &[ReducedSecondaryStructure]) -> Vec<SecondaryStructureSegment> {
    let mut out: Vec<SecondaryStructureSegment> = Vec::new();
    for (index, &kind) in reduced.iter().enumerate() {
        match out.last_mut() {
            Some(last) if last.kind == kind => last.end = index,
            _ => out.push(SecondaryStructureSegment {
                kind,
                start: index,
                end: index,
            }),
        }
    }
    out
}

/// The segment surrounding `index`
pub fn segment_at(reduced: &[ReducedSecondaryStructure], index: usize) -> Option<SecondaryStructureSegment> {
    let kind = *reduced.get(index)?;
    let start = reduced[..index]
        .iter()
        .rposition(|&k| k != kind)
        .map_or(0, |p| p + 1);
    let end = reduced[index..]
        .iter()
        .position(|&k| k != kind)
        .map_or(reduced.len() - 1, |p| index + p - 1);
    Some(SecondaryStructureSegment { kind, start, end })
}
