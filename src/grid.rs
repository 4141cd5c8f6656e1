// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  One type serves several
/// roles during processing: a field of f64s for the energy map, or
/// distance + parent pairs for the seam solver's scratch space.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Define a new grid, every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The vector length must
    /// agree with the stated dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Return a new grid with the axes swapped: cell (x, y) of the
    /// result holds cell (y, x) of the original.
    pub fn transposed(&self) -> Grid<P> {
        let mut flipped = Grid::new(self.height, self.width);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            flipped[(y, x)] = self[(x, y)];
        }
        flipped
    }

    /// Compact the grid in place, dropping cell `seam[y]` from each
    /// row and shifting everything to its right one cell left.  The
    /// width shrinks by one.  The seam is assumed validated; the
    /// write cursor never catches up to the read cursor, so the
    /// single pass is safe.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) {
        debug_assert!(self.width > 1);
        debug_assert_eq!(seam.len(), self.height as usize);
        let width = self.width as usize;
        let mut write = 0;
        for y in 0..self.height as usize {
            let gap = seam[y] as usize;
            for x in 0..width {
                if x == gap {
                    continue;
                }
                self.cells[write] = self.cells[y * width + x];
                write += 1;
            }
        }
        self.cells.truncate(write);
        self.width -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let grid = Grid::from_raw(3, 2, vec![0u32, 1, 2, 10, 11, 12]);
        assert_eq!(grid[(0, 0)], 0);
        assert_eq!(grid[(2, 0)], 2);
        assert_eq!(grid[(0, 1)], 10);
        assert_eq!(grid[(2, 1)], 12);
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid = Grid::from_raw(3, 2, vec![0u32, 1, 2, 10, 11, 12]);
        let flipped = grid.transposed();
        assert_eq!(flipped.width(), 2);
        assert_eq!(flipped.height(), 3);
        assert_eq!(flipped, Grid::from_raw(2, 3, vec![0, 10, 1, 11, 2, 12]));
    }

    #[test]
    fn seam_removal_compacts_each_row() {
        let mut grid = Grid::from_raw(4, 3, vec![0u32, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]);
        grid.remove_vertical_seam(&[1, 2, 3]);
        assert_eq!(grid, Grid::from_raw(3, 3, vec![0, 2, 3, 10, 11, 13, 20, 21, 22]));
    }

    #[test]
    fn seam_removal_down_to_one_column() {
        let mut grid = Grid::from_raw(2, 2, vec![1u32, 2, 3, 4]);
        grid.remove_vertical_seam(&[0, 1]);
        assert_eq!(grid, Grid::from_raw(1, 2, vec![2, 3]));
    }
}
