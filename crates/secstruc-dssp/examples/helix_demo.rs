//! Secondary structure of a synthetic helix-loop-strand backbone
//!
//! Builds a backbone from internal coordinates, runs the assignment and
//! prints the DSSP and three-state strings together with per-residue angles.
//!
//! Run with `RUST_LOG=debug` to see per-pass logging.

use lin_alg::f64::Vec3;
use secstruc_dssp::{assign_secondary_structure, DsspSettings};
use secstruc_mol::{AminoAcid, Atom, Chain, Residue};

/// Place D from A, B, C with bond length, bond angle and torsion (degrees)
fn place(a: Vec3, b: Vec3, c: Vec3, length: f64, angle: f64, torsion: f64) -> Vec3 {
    let bc = (c - b).to_normalized();
    let n = (b - a).cross(bc).to_normalized();
    let m = n.cross(bc);
    let (theta, phi) = (angle.to_radians(), torsion.to_radians());
    c + bc * (-length * theta.cos())
        + m * (length * theta.sin() * phi.cos())
        + n * (length * theta.sin() * phi.sin())
}

fn build(angles: &[(f64, f64)]) -> Chain {
    let mut n = Vec3::new(0.0, 0.0, 0.0);
    let mut ca = Vec3::new(1.458, 0.0, 0.0);
    let theta = 111.2_f64.to_radians();
    let mut c = ca + Vec3::new(-theta.cos(), theta.sin(), 0.0) * 1.525;

    let mut chain = Chain::new("A");
    for (i, &(_, psi)) in angles.iter().enumerate() {
        let o = place(n, ca, c, 1.231, 120.5, psi + 180.0);
        let mut residue = Residue::new(AminoAcid::Ala, i as i32 + 1);
        for (name, coord) in [("N", n), ("CA", ca), ("C", c), ("O", o)] {
            residue.add_atom(Atom::from_name(name, coord));
        }
        chain.push(residue);

        let next_phi = angles.get(i + 1).map_or(-60.0, |&(phi, _)| phi);
        let next_n = place(n, ca, c, 1.329, 116.2, psi);
        let next_ca = place(ca, c, next_n, 1.458, 121.7, 180.0);
        let next_c = place(c, next_n, next_ca, 1.525, 111.2, next_phi);
        n = next_n;
        ca = next_ca;
        c = next_c;
    }
    chain
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut angles = vec![(-57.0, -47.0); 14];
    angles.extend([(-90.0, 0.0), (80.0, 10.0), (-70.0, 150.0)]);
    angles.extend(vec![(-120.0, 130.0); 8]);
    let chain = build(&angles);

    let settings = DsspSettings::default();
    let assignment = match assign_secondary_structure(&chain, &settings) {
        Ok(assignment) => assignment,
        Err(err) => {
            log::error!("assignment failed: {err}");
            std::process::exit(1);
        }
    };

    log::info!("{}", assignment.summary());
    println!("sequence  {}", chain.sequence());
    println!("dssp      {}", assignment.one_letter_string());
    println!("reduced   {}", assignment.reduced_string());
    println!();
    println!("  #  ss turn   phi     psi    kappa");
    for (i, state) in assignment.states.iter().enumerate() {
        println!(
            "{:>3}  {}  {}  {:>7.1} {:>7.1} {:>7.1}",
            i,
            state.sse.one_letter(),
            state.turn_string(),
            state.phi,
            state.psi,
            state.kappa
        );
    }
    for element in assignment.elements() {
        println!(
            "{:<6} {:>3}..{:<3} ({} residues)",
            element.kind.name(),
            element.start,
            element.end,
            element.size()
        );
    }
}
