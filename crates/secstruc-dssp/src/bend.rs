//! Bend detection from the CA virtual bond angle

use secstruc_mol::geometry::{angle, distance_squared};
use secstruc_mol::SecondaryStructureType;

use crate::hbond::BackboneFrame;
use crate::settings::DsspSettings;
use crate::state::{ResidueState, UNDEFINED_ANGLE};

/// Whether C(i) - N(i+1) is short enough to be a peptide bond
fn is_peptide_bonded(frames: &[BackboneFrame], i: usize, max_sq: f64) -> bool {
    match (frames[i].c, frames[i + 1].n) {
        (Some(c), Some(n)) => distance_squared(c, n) <= max_sq,
        _ => false,
    }
}

/// Compute kappa for residues 2..len-3 and mark bends
///
/// Kappa is only computed where the backbone is continuous from i-2 to i+2.
pub fn detect_bends(frames: &[BackboneFrame], states: &mut [ResidueState], settings: &DsspSettings) {
    let max_sq = settings.max_peptide_bond_length_squared();
    for i in 2..frames.len().saturating_sub(2) {
        if !(i - 2..=i + 1).all(|k| is_peptide_bonded(frames, k, max_sq)) {
            log::debug!("Backbone break near residue {}, no kappa", i);
            continue;
        }
        let (Some(prev), Some(mid), Some(next)) = (frames[i - 2].ca, frames[i].ca, frames[i + 2].ca)
        else {
            continue;
        };

        let kappa = angle(prev - mid, mid - next);
        let state = &mut states[i];
        state.kappa = kappa;

        if kappa > settings.bend_min_kappa && kappa < UNDEFINED_ANGLE - 0.01 {
            state.raise(SecondaryStructureType::Bend);
            state.bend = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lin_alg::f64::Vec3;

    /// Residues with CA on the given points; C(i) and N(i+1) meet halfway
    fn frames_from_ca(points: &[Vec3]) -> Vec<BackboneFrame> {
        let len = points.len();
        (0..len)
            .map(|i| BackboneFrame {
                n: Some(if i > 0 { (points[i - 1] + points[i]) * 0.5 } else { points[i] }),
                ca: Some(points[i]),
                c: Some(if i + 1 < len { (points[i] + points[i + 1]) * 0.5 } else { points[i] }),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_straight_chain_has_no_bend() {
        let points: Vec<Vec3> = (0..7).map(|i| Vec3::new(1.5 * i as f64, 0.0, 0.0)).collect();
        let frames = frames_from_ca(&points);
        let mut states = vec![ResidueState::default(); points.len()];
        detect_bends(&frames, &mut states, &DsspSettings::default());

        for i in 2..5 {
            assert!(states[i].kappa.abs() < 1e-6);
            assert!(!states[i].bend);
        }
        assert_eq!(states[0].kappa, UNDEFINED_ANGLE);
        assert_eq!(states[6].kappa, UNDEFINED_ANGLE);
    }

    #[test]
    fn test_hairpin_corner_is_bend() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 1.5, 0.0),
            Vec3::new(3.0, 3.0, 0.0),
        ];
        let frames = frames_from_ca(&points);
        let mut states = vec![ResidueState::default(); points.len()];
        detect_bends(&frames, &mut states, &DsspSettings::default());

        assert!((states[2].kappa - 90.0).abs() < 1e-6);
        assert!(states[2].bend);
        assert_eq!(states[2].sse, SecondaryStructureType::Bend);
    }

    #[test]
    fn test_chain_break_suppresses_kappa() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 1.5, 0.0),
            Vec3::new(3.0, 3.0, 0.0),
        ];
        let mut frames = frames_from_ca(&points);
        frames[1].c = None;
        let mut states = vec![ResidueState::default(); points.len()];
        detect_bends(&frames, &mut states, &DsspSettings::default());

        assert_eq!(states[2].kappa, UNDEFINED_ANGLE);
        assert!(!states[2].bend);
    }
}
