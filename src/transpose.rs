// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The transpose trick
//!
//! One solver, two orientations: to find or remove a horizontal seam,
//! the carver flips the picture and the energy field a quarter turn,
//! runs the ordinary vertical-seam machinery, and reinterprets the
//! result as row-per-column.  The flip is lazy; the carver tracks
//! which layout it currently holds and only pays the O(W·H) transpose
//! when an operation actually switches orientation.

use image::RgbImage;
use itertools::iproduct;

/// Which physical layout the carver currently holds.  `Normal` means
/// the stored grid matches what the caller handed in; `Transposed`
/// means rows and columns are swapped because the last operation was
/// horizontal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    Transposed,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Transposed,
            Orientation::Transposed => Orientation::Normal,
        }
    }
}

/// A new picture with the axes swapped: pixel (x, y) of the result is
/// pixel (y, x) of the original.  Pure; the original is untouched.
pub fn transpose_picture(picture: &RgbImage) -> RgbImage {
    let (width, height) = picture.dimensions();
    let mut flipped = RgbImage::new(height, width);
    for (y, x) in iproduct!(0..height, 0..width) {
        flipped.put_pixel(y, x, *picture.get_pixel(x, y));
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(Orientation::Normal.flip().flip(), Orientation::Normal);
        assert_eq!(Orientation::Normal.flip(), Orientation::Transposed);
    }

    #[test]
    fn transpose_swaps_pixels_and_dimensions() {
        let picture = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 0]));
        let flipped = transpose_picture(&picture);
        assert_eq!(flipped.dimensions(), (2, 3));
        for (y, x) in iproduct!(0..2u32, 0..3u32) {
            assert_eq!(flipped.get_pixel(y, x), picture.get_pixel(x, y));
        }
    }

    #[test]
    fn double_transpose_restores_the_picture() {
        let picture = RgbImage::from_fn(4, 3, |x, y| Rgb([(x * 40) as u8, (y * 70) as u8, 9]));
        assert_eq!(transpose_picture(&transpose_picture(&picture)), picture);
    }
}
