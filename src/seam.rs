// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-energy seam over the energy field
//!
//! The pixel grid is an implicit DAG: every pixel of row r reaches
//! the three pixels of row r+1 at columns c-1, c, c+1 (clamped at the
//! sides), each edge weighted by the destination's energy.  Every
//! edge steps down exactly one row, so the rows themselves are a
//! topological order and one forward sweep relaxes everything; no
//! explicit sort, no recursion.
//!
//! Ties are broken toward the lower column index, both when a pixel
//! picks its parent and when the bottom-row endpoint is chosen, so
//! the same field always yields the same seam.

use crate::cq;
use crate::energy::EnergyField;
use crate::grid::Grid;

/// The solver's per-pixel scratch: the cost of the cheapest path
/// from the top row, and the column the path came through one row up.
#[derive(Default, Debug, Copy, Clone)]
struct DistAndParent {
    dist: f64,
    parent: u32,
}

/// Given an energy field, return the list of x-coordinates that, when
/// zipped with the range (0..height), give the XY coordinates of each
/// pixel in the cheapest top-to-bottom seam.  Consecutive entries
/// differ by at most one, by construction.
///
/// An empty field is a programming error; the carver never constructs
/// one.
pub fn find_vertical_seam(energy: &EnergyField) -> Vec<u32> {
    let (width, height) = (energy.width(), energy.height());
    assert!(width >= 1 && height >= 1);

    // Fresh scratch per solve; nothing is shared across calls.
    let mut target: Grid<DistAndParent> = Grid::new(width, height);

    // The top row's cheapest path is the pixel itself.
    for x in 0..width {
        target[(x, 0)] = DistAndParent {
            dist: energy.at(x, 0),
            parent: x,
        };
    }

    let maxwidth = width - 1;
    // For every subsequent row, each pixel's cost is its own energy
    // plus the cheapest of the up-to-three cells above it.  The
    // strict `<` scan over an ascending range is what pins ties to
    // the lowest column.
    for y in 1..height {
        for x in 0..width {
            let mut parent_x = cq!(x == 0, 0, x - 1);
            let mut best = target[(parent_x, y - 1)].dist;
            for above in (parent_x + 1)..=cq!(x == maxwidth, maxwidth, x + 1) {
                let dist = target[(above, y - 1)].dist;
                if dist < best {
                    best = dist;
                    parent_x = above;
                }
            }
            target[(x, y)] = DistAndParent {
                dist: best + energy.at(x, y),
                parent: parent_x,
            };
        }
    }

    // Find the x coordinate of the cheapest bottom-row endpoint.
    let bottom = height - 1;
    let mut seam_col = 0;
    for x in 1..width {
        if target[(x, bottom)].dist < target[(seam_col, bottom)].dist {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: u32, height: u32, cells: &[f64]) -> EnergyField {
        EnergyField::from_raw(width, height, cells.to_vec())
    }

    #[test]
    fn follows_the_cheap_diagonal() {
        #[rustfmt::skip]
        let energies = field(5, 4, &[
            1.0, 9.0, 9.0, 9.0, 9.0,
            9.0, 1.0, 9.0, 9.0, 9.0,
            9.0, 9.0, 1.0, 9.0, 9.0,
            9.0, 9.0, 9.0, 1.0, 9.0,
        ]);
        assert_eq!(find_vertical_seam(&energies), vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_resolve_to_the_lowest_column() {
        let energies = field(4, 3, &[7.0; 12]);
        assert_eq!(find_vertical_seam(&energies), vec![0, 0, 0]);
    }

    #[test]
    fn seam_is_connected_and_in_range() {
        #[rustfmt::skip]
        let energies = field(5, 5, &[
            3.0, 1.0, 4.0, 1.0, 5.0,
            9.0, 2.0, 6.0, 5.0, 3.0,
            5.0, 8.0, 9.0, 7.0, 9.0,
            3.0, 2.0, 3.0, 8.0, 4.0,
            6.0, 2.0, 6.0, 4.0, 3.0,
        ]);
        let seam = find_vertical_seam(&energies);
        assert_eq!(seam.len(), 5);
        for pair in seam.windows(2) {
            assert!((i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1);
        }
        assert!(seam.iter().all(|&x| x < 5));
    }

    #[test]
    fn single_column_field_yields_the_only_seam() {
        let energies = field(1, 3, &[5.0, 5.0, 5.0]);
        assert_eq!(find_vertical_seam(&energies), vec![0, 0, 0]);
    }

    #[test]
    fn single_row_field_picks_the_cheapest_pixel() {
        let energies = field(4, 1, &[4.0, 2.0, 2.0, 3.0]);
        assert_eq!(find_vertical_seam(&energies), vec![1]);
    }

    #[test]
    fn repeated_solves_agree() {
        #[rustfmt::skip]
        let energies = field(4, 3, &[
            2.0, 2.0, 2.0, 2.0,
            1.0, 1.0, 1.0, 1.0,
            3.0, 3.0, 3.0, 3.0,
        ]);
        assert_eq!(find_vertical_seam(&energies), find_vertical_seam(&energies));
    }
}
