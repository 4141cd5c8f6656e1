// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-pixel energy of an image
//!
//! The energy of a pixel measures how visually important it is: the
//! magnitude of the local color gradient, computed per channel by
//! central differences and summed in quadrature.  Pixels on the
//! picture border have no complete neighborhood and are pinned to a
//! large sentinel instead, which keeps seams from hugging the edges.
//! The field is computed in full exactly once, at construction;
//! afterwards every seam removal patches only the cells whose
//! neighborhoods actually changed.

use crate::grid::Grid;
use image::{Rgb, RgbImage};
use itertools::iproduct;

/// The fixed energy of every border pixel.  Border pixels have no
/// left/right or up/down neighbor pair, so the gradient formula does
/// not apply to them; the sentinel takes precedence over content.
pub const BOUNDARY_ENERGY: f64 = 1000.0;

// Takes the channels (R,G,B) of two pixels, maps the difference of
// each channel, squares it, and sums them up:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
fn gradient_squared(p1: &Rgb<u8>, p2: &Rgb<u8>) -> f64 {
    p1.0.iter()
        .zip(p2.0.iter())
        .map(|(&c1, &c2)| {
            let d = f64::from(c1) - f64::from(c2);
            d * d
        })
        .sum()
}

/// The energy of one pixel of `picture`:
///
/// ```text
/// e(x,y) = √(|Δx|² + |Δy|²)
/// ```
///
/// with Δx and Δy taken as central differences between the two
/// horizontal and the two vertical neighbors.  Border pixels take
/// [`BOUNDARY_ENERGY`].  The formula is symmetric in x and y, which
/// is what lets the transpose trick reuse it unchanged.
pub fn pixel_energy(picture: &RgbImage, x: u32, y: u32) -> f64 {
    let (width, height) = picture.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BOUNDARY_ENERGY;
    }
    let dx2 = gradient_squared(picture.get_pixel(x - 1, y), picture.get_pixel(x + 1, y));
    let dy2 = gradient_squared(picture.get_pixel(x, y - 1), picture.get_pixel(x, y + 1));
    (dx2 + dy2).sqrt()
}

/// The energy of every pixel of a picture, kept consistent with the
/// picture across seam removals.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyField {
    grid: Grid<f64>,
}

impl EnergyField {
    /// Compute the full field.  This is the only place the whole
    /// picture is scanned; everything afterwards is incremental.
    pub fn from_picture(picture: &RgbImage) -> Self {
        let (width, height) = picture.dimensions();
        let mut grid = Grid::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            grid[(x, y)] = pixel_energy(picture, x, y);
        }
        EnergyField { grid }
    }

    /// Wrap a precomputed grid of energies.  Mostly useful for
    /// feeding the seam solver synthetic fields.
    pub fn from_raw(width: u32, height: u32, cells: Vec<f64>) -> Self {
        EnergyField {
            grid: Grid::from_raw(width, height, cells),
        }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The stored energy at (x, y).  Callers are trusted to stay in
    /// range; the public, validating entry point is on the carver.
    pub fn at(&self, x: u32, y: u32) -> f64 {
        self.grid[(x, y)]
    }

    /// A new field with the axes swapped.  Valid as a stand-in for
    /// recomputing from a transposed picture because the energy
    /// formula is x/y symmetric.
    pub fn transposed(&self) -> Self {
        EnergyField {
            grid: self.grid.transposed(),
        }
    }

    /// Drop cell `seam[y]` from each row, then re-derive the cells
    /// whose neighborhoods the removal disturbed.  `carved` is the
    /// picture *after* the seam came out; its dimensions match the
    /// compacted grid.
    pub(crate) fn remove_seam(&mut self, carved: &RgbImage, seam: &[u32]) {
        self.grid.remove_vertical_seam(seam);
        self.refresh_along_seam(carved, seam);
    }

    // Only the pixel now at seam[y]-1 and the pixel now at seam[y]
    // can have a changed neighborhood: the seam's connectivity bounds
    // the drift between adjacent rows to one column, so no other cell
    // sees a different neighbor.  A single remaining column is border
    // from top to bottom and is recomputed outright.
    fn refresh_along_seam(&mut self, carved: &RgbImage, seam: &[u32]) {
        let (width, height) = carved.dimensions();
        if width == 1 {
            for y in 0..height {
                self.grid[(0, y)] = pixel_energy(carved, 0, y);
            }
            return;
        }
        for y in 0..height {
            let gap = seam[y as usize];
            if gap > 0 {
                self.grid[(gap - 1, y)] = pixel_energy(carved, gap - 1, y);
            }
            if gap < width {
                self.grid[(gap, y)] = pixel_energy(carved, gap, y);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // The 3x4 reference picture: only (1,1) and (1,2) are interior,
    // and their energies are computable by hand.
    pub(crate) fn reference_picture() -> RgbImage {
        let data: [[u8; 3]; 12] = [
            [255, 101, 51],
            [255, 101, 153],
            [255, 101, 255],
            [255, 153, 51],
            [255, 153, 153],
            [255, 153, 255],
            [255, 203, 51],
            [255, 204, 153],
            [255, 205, 255],
            [255, 255, 51],
            [255, 255, 153],
            [255, 255, 255],
        ];
        RgbImage::from_fn(3, 4, |x, y| Rgb(data[(y * 3 + x) as usize]))
    }

    #[test]
    fn border_pixels_take_the_sentinel() {
        let field = EnergyField::from_picture(&reference_picture());
        for (y, x) in iproduct!(0..4u32, 0..3u32) {
            if (x, y) == (1, 1) || (x, y) == (1, 2) {
                continue;
            }
            assert_eq!(field.at(x, y), BOUNDARY_ENERGY, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn interior_energies_match_hand_computation() {
        // (1,1): Δx = (0,0,204), Δy = (0,103,0) -> √(204² + 103²)
        // (1,2): Δx = (0,2,204), Δy = (0,102,0)  -> √(41620 + 10404)
        let field = EnergyField::from_picture(&reference_picture());
        assert!((field.at(1, 1) - 52225f64.sqrt()).abs() < 1e-9);
        assert!((field.at(1, 2) - 52024f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn uniform_picture_has_zero_interior_energy() {
        let picture = RgbImage::from_pixel(5, 5, Rgb([77, 77, 77]));
        let field = EnergyField::from_picture(&picture);
        for (y, x) in iproduct!(1..4u32, 1..4u32) {
            assert_eq!(field.at(x, y), 0.0);
        }
        assert_eq!(field.at(0, 2), BOUNDARY_ENERGY);
        assert_eq!(field.at(4, 2), BOUNDARY_ENERGY);
    }

    #[test]
    fn transposed_field_matches_field_of_transposed_picture() {
        let picture = reference_picture();
        let flipped = crate::transpose::transpose_picture(&picture);
        assert_eq!(
            EnergyField::from_picture(&picture).transposed(),
            EnergyField::from_picture(&flipped)
        );
    }
}
