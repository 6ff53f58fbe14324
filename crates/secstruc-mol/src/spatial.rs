//! Spatial hash grid for CA proximity queries
//!
//! Used to enumerate residue pairs close enough to form backbone H-bonds or
//! beta bridges without a quadratic scan.

use ahash::AHashMap;
use lin_alg::f64::Vec3;

/// Uniform spatial hash grid
///
/// Divides 3D space into cubic cells. Each cell stores indices of points that
/// fall within it. Neighbor queries check the 3×3×3 neighborhood of cells
/// around the query point, guaranteeing all points within `cell_size`
/// distance are found.
pub struct SpatialGrid {
    cells: AHashMap<(i32, i32, i32), Vec<usize>>,
    cell_size: f64,
}

impl SpatialGrid {
    pub fn with_capacity(cell_size: f64, expected_points: usize) -> Self {
        Self {
            cells: AHashMap::with_capacity(expected_points),
            cell_size,
        }
    }

    fn cell_key(&self, pos: Vec3) -> (i32, i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
            (pos.z / self.cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, pos: Vec3, idx: usize) {
        let key = self.cell_key(pos);
        self.cells.entry(key).or_default().push(idx);
    }

    /// Collect all indices in the 3×3×3 neighborhood of the given position
    pub fn query_neighbors(&self, pos: Vec3, out: &mut Vec<usize>) {
        out.clear();
        let (cx, cy, cz) = self.cell_key(pos);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(indices) = self.cells.get(&(cx.saturating_add(dx), cy.saturating_add(dy), cz.saturating_add(dz))) {
                        out.extend_from_slice(indices);
                    }
                }
            }
        }
    }
}

/// All pairs `(i, j)` with `i < j` whose points lie within `cutoff` of each other
///
/// Points that are `None` take part in no pair. The result is sorted
/// ascending by `(i, j)`, the same order a nested loop would produce.
pub fn contact_pairs(points: &[Option<Vec3>], cutoff: f64) -> Vec<(usize, usize)> {
    let cutoff_sq = cutoff * cutoff;
    let mut grid = SpatialGrid::with_capacity(cutoff.max(1e-3), points.len());
    for (idx, pos) in points.iter().enumerate() {
        if let Some(pos) = pos {
            grid.insert(*pos, idx);
        }
    }

    let mut pairs = Vec::new();
    let mut neighbors = Vec::new();
    for (i, pos) in points.iter().enumerate() {
        let Some(pos) = *pos else { continue };
        grid.query_neighbors(pos, &mut neighbors);
        for &j in &neighbors {
            if j <= i {
                continue;
            }
            if let Some(other) = points[j] {
                if (other - pos).magnitude_squared() <= cutoff_sq {
                    pairs.push((i, j));
                }
            }
        }
    }
    pairs.sort_unstable();
    pairs
}
