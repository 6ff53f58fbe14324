//! Backbone builders shared by the integration tests

#![allow(dead_code)]

use lin_alg::f64::Vec3;
use secstruc_mol::{AminoAcid, Atom, Chain, Residue};

// Engh & Huber backbone geometry
const N_CA: f64 = 1.458;
const CA_C: f64 = 1.525;
const C_N: f64 = 1.329;
const C_O: f64 = 1.231;
const ANGLE_N_CA_C: f64 = 111.2;
const ANGLE_CA_C_N: f64 = 116.2;
const ANGLE_C_N_CA: f64 = 121.7;
const ANGLE_CA_C_O: f64 = 120.5;

/// Place D so that |CD| = length, angle BCD = angle and torsion ABCD = torsion (degrees)
pub fn place(a: Vec3, b: Vec3, c: Vec3, length: f64, angle: f64, torsion: f64) -> Vec3 {
    let bc = (c - b).to_normalized();
    let n = (b - a).cross(bc).to_normalized();
    let m = n.cross(bc);
    let (theta, phi) = (angle.to_radians(), torsion.to_radians());

    c + bc * (-length * theta.cos())
        + m * (length * theta.sin() * phi.cos())
        + n * (length * theta.sin() * phi.sin())
}

fn residue(number: i32, atoms: &[(&str, Vec3)]) -> Residue {
    let mut residue = Residue::new(AminoAcid::Ala, number);
    for (name, coord) in atoms {
        residue.add_atom(Atom::from_name(*name, *coord));
    }
    residue
}

/// Backbone (N, CA, C, O; no H) with constant phi, psi and omega
pub fn backbone(len: usize, phi: f64, psi: f64, omega: f64) -> Chain {
    let mut n = Vec3::new(0.0, 0.0, 0.0);
    let mut ca = Vec3::new(N_CA, 0.0, 0.0);
    let theta = ANGLE_N_CA_C.to_radians();
    let mut c = ca + Vec3::new(-theta.cos(), theta.sin(), 0.0) * CA_C;

    let mut chain = Chain::with_capacity("A", len);
    for i in 0..len {
        let o = place(n, ca, c, C_O, ANGLE_CA_C_O, psi + 180.0);
        chain.push(residue(i as i32 + 1, &[("N", n), ("CA", ca), ("C", c), ("O", o)]));

        let next_n = place(n, ca, c, C_N, ANGLE_CA_C_N, psi);
        let next_ca = place(ca, c, next_n, N_CA, ANGLE_C_N_CA, omega);
        let next_c = place(c, next_n, next_ca, CA_C, ANGLE_N_CA_C, phi);
        n = next_n;
        ca = next_ca;
        c = next_c;
    }
    chain
}

/// Ideal right-handed alpha helix
pub fn alpha_helix(len: usize) -> Chain {
    backbone(len, -57.0, -47.0, 180.0)
}

/// Shift every atom of one residue
pub fn displace_residue(chain: &Chain, index: usize, offset: Vec3) -> Chain {
    chain
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut moved = Residue::new(r.amino_acid, r.number);
            for atom in r.atoms() {
                let mut atom = atom.clone();
                if i == index {
                    atom.coord = atom.coord + offset;
                }
                moved.add_atom(atom);
            }
            moved
        })
        .collect()
}

/// Copy of `chain` with the named atom removed from one residue
pub fn without_atom(chain: &Chain, index: usize, name: &str) -> Chain {
    chain
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut copy = Residue::new(r.amino_acid, r.number);
            for atom in r.atoms() {
                if !(i == index && atom.name == name) {
                    copy.add_atom(atom.clone());
                }
            }
            copy
        })
        .collect()
}

/// Flat two-stranded antiparallel hairpin with explicit amide hydrogens
///
/// Strand A is residues 0..=7 along +x at y = 0, strand B is residues
/// 10..=17 running back along -x at y = 5.23. Residues 8, 9 (loop) and 18
/// (tail) sit far above the sheet. Residue k pairs with residue 17 - k; the
/// even-k pairs point their N-H and C=O at each other.
pub fn antiparallel_hairpin() -> Chain {
    const GAP: f64 = 5.23;
    let mut chain = Chain::with_capacity("A", 19);

    for k in 0..8 {
        let x = 3.4 * k as f64;
        let s = if k % 2 == 0 { 1.0 } else { -1.0 };
        chain.push(residue(
            k + 1,
            &[
                ("N", Vec3::new(x - 1.2, 0.5 * s, 0.0)),
                ("H", Vec3::new(x - 1.2, 1.5 * s, 0.0)),
                ("CA", Vec3::new(x, 0.0, 0.0)),
                ("C", Vec3::new(x + 1.2, 0.5 * s, 0.0)),
                ("O", Vec3::new(x + 1.2, 1.73 * s, 0.0)),
            ],
        ));
    }

    chain.push(residue(
        9,
        &[
            ("N", Vec3::new(26.0, 1.0, 20.0)),
            ("CA", Vec3::new(27.0, 2.0, 20.0)),
            ("C", Vec3::new(28.0, 3.0, 20.0)),
            ("O", Vec3::new(29.0, 3.0, 20.0)),
        ],
    ));
    chain.push(residue(
        10,
        &[
            ("N", Vec3::new(28.0, 4.0, 20.0)),
            ("CA", Vec3::new(27.0, 5.0, 20.0)),
            ("C", Vec3::new(26.0, 6.0, 20.0)),
            ("O", Vec3::new(25.0, 6.0, 20.0)),
        ],
    ));

    for t in 0..8 {
        let x = 3.4 * (7 - t) as f64;
        let s = if t % 2 == 1 { -1.0 } else { 1.0 };
        chain.push(residue(
            t + 11,
            &[
                ("N", Vec3::new(x + 1.2, GAP + 0.5 * s, 0.0)),
                ("H", Vec3::new(x + 1.2, GAP + 1.5 * s, 0.0)),
                ("CA", Vec3::new(x, GAP, 0.0)),
                ("C", Vec3::new(x - 1.2, GAP + 0.5 * s, 0.0)),
                ("O", Vec3::new(x - 1.2, GAP + 1.73 * s, 0.0)),
            ],
        ));
    }

    chain.push(residue(
        19,
        &[
            ("N", Vec3::new(-8.0, GAP, 20.0)),
            ("CA", Vec3::new(-9.0, GAP, 20.0)),
            ("C", Vec3::new(-10.0, GAP, 20.0)),
            ("O", Vec3::new(-10.0, GAP + 1.2, 20.0)),
        ],
    ));
    chain
}
