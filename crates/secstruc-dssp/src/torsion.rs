//! Backbone torsion angles phi, psi and omega

use secstruc_mol::geometry::torsion;

use crate::hbond::BackboneFrame;
use crate::state::ResidueState;

/// Compute phi, psi and omega for every consecutive residue pair
///
/// phi is stored on the second residue; psi and omega on the first. Pairs
/// missing any of N, CA, C on either side keep the undefined sentinel.
pub fn calculate_dihedral_angles(frames: &[BackboneFrame], states: &mut [ResidueState]) {
    for i in 0..frames.len().saturating_sub(1) {
        let (first, second) = (&frames[i], &frames[i + 1]);
        let (Some(n1), Some(ca1), Some(c1), Some(n2), Some(ca2), Some(c2)) =
            (first.n, first.ca, first.c, second.n, second.ca, second.c)
        else {
            log::debug!("Skipping torsions between residues {} and {}: missing backbone atoms", i, i + 1);
            continue;
        };

        states[i + 1].phi = torsion(c1, n2, ca2, c2);
        states[i].psi = torsion(n1, ca1, c1, n2);
        states[i].omega = torsion(ca1, c1, n2, ca2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UNDEFINED_ANGLE;
    use lin_alg::f64::Vec3;

    fn frame(n: Vec3, ca: Vec3, c: Vec3) -> BackboneFrame {
        BackboneFrame {
            n: Some(n),
            ca: Some(ca),
            c: Some(c),
            ..Default::default()
        }
    }

    #[test]
    fn test_planar_trans_pair() {
        // A flat zig-zag: every torsion is 180 degrees
        let frames = [
            frame(
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
            ),
            frame(
                Vec3::new(3.0, 1.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
                Vec3::new(5.0, 1.0, 0.0),
            ),
        ];
        let mut states = vec![ResidueState::default(); 2];
        calculate_dihedral_angles(&frames, &mut states);

        assert!((states[0].psi.abs() - 180.0).abs() < 1e-6);
        assert!((states[0].omega.abs() - 180.0).abs() < 1e-6);
        assert!((states[1].phi.abs() - 180.0).abs() < 1e-6);
        assert_eq!(states[0].phi, UNDEFINED_ANGLE);
        assert_eq!(states[1].psi, UNDEFINED_ANGLE);
    }

    #[test]
    fn test_missing_atom_keeps_sentinel() {
        let mut second = frame(
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(5.0, 1.0, 0.0),
        );
        second.ca = None;
        let frames = [
            frame(
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
            ),
            second,
        ];
        let mut states = vec![ResidueState::default(); 2];
        calculate_dihedral_angles(&frames, &mut states);

        assert_eq!(states[0].psi, UNDEFINED_ANGLE);
        assert_eq!(states[1].phi, UNDEFINED_ANGLE);
    }
}
