// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam carver
//!
//! The carver owns a private copy of the picture, the energy field
//! derived from it, and the orientation flag that records whether the
//! stored grids are currently flipped.  Everything the caller sees --
//! coordinates, dimensions, seams, the picture itself -- is expressed
//! in the natural orientation; the transpose is an internal affair.
//!
//! Every operation validates its arguments completely before touching
//! any state, so a rejected call leaves the carver exactly as it was.

use crate::energy::EnergyField;
use crate::error::CarveError;
use crate::seam;
use crate::transpose::{transpose_picture, Orientation};
use crate::cq;
use image::RgbImage;
use log::debug;

/// A content-aware resizing engine over one picture.
pub struct SeamCarver {
    picture: RgbImage,
    energy: EnergyField,
    orientation: Orientation,
}

impl SeamCarver {
    /// Take ownership of a picture and derive its energy field.  The
    /// only full scan of the picture happens here.
    pub fn new(picture: RgbImage) -> Result<Self, CarveError> {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyPicture);
        }
        let energy = EnergyField::from_picture(&picture);
        Ok(SeamCarver {
            picture,
            energy,
            orientation: Orientation::Normal,
        })
    }

    /// Width of the picture as the caller sees it, whatever the
    /// internal layout.
    pub fn width(&self) -> u32 {
        match self.orientation {
            Orientation::Normal => self.picture.width(),
            Orientation::Transposed => self.picture.height(),
        }
    }

    /// Height of the picture as the caller sees it.
    pub fn height(&self) -> u32 {
        match self.orientation {
            Orientation::Normal => self.picture.height(),
            Orientation::Transposed => self.picture.width(),
        }
    }

    /// The energy of the pixel at natural coordinates (x, y).  A
    /// query never transposes anything; it reads through the flag.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, CarveError> {
        if x >= self.width() || y >= self.height() {
            return Err(CarveError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(match self.orientation {
            Orientation::Normal => self.energy.at(x, y),
            Orientation::Transposed => self.energy.at(y, x),
        })
    }

    /// The current picture, restored to natural orientation first if
    /// the last operation left it flipped.
    pub fn picture(&mut self) -> &RgbImage {
        self.align(Orientation::Normal);
        &self.picture
    }

    /// Consume the carver, yielding the natural-orientation picture.
    pub fn into_picture(mut self) -> RgbImage {
        self.align(Orientation::Normal);
        self.picture
    }

    /// The cheapest top-to-bottom seam: one column index per row,
    /// adjacent entries within one of each other.  Always succeeds on
    /// a live carver.
    pub fn find_vertical_seam(&mut self) -> Vec<u32> {
        self.align(Orientation::Normal);
        seam::find_vertical_seam(&self.energy)
    }

    /// The cheapest left-to-right seam: one row index per column.
    /// Flips the grids if the previous operation was vertical, then
    /// runs the identical solver.
    pub fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.align(Orientation::Transposed);
        seam::find_vertical_seam(&self.energy)
    }

    /// Remove a vertical seam, shrinking the width by exactly one.
    /// The seam must have one entry per row, every entry in range,
    /// and no step larger than one; anything else is rejected before
    /// any mutation.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        if self.width() <= 1 {
            return Err(CarveError::TooNarrow { width: self.width() });
        }
        validate_seam(seam, self.height(), self.width())?;
        self.align(Orientation::Normal);
        self.excise(seam);
        Ok(())
    }

    /// Remove a horizontal seam, shrinking the height by exactly one.
    /// Validation happens against the natural dimensions; the actual
    /// removal is the vertical remover run on the flipped grids.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        if self.height() <= 1 {
            return Err(CarveError::TooShort { height: self.height() });
        }
        validate_seam(seam, self.width(), self.height())?;
        self.align(Orientation::Transposed);
        self.excise(seam);
        Ok(())
    }

    /// Carve down to the requested dimensions, alternating vertical
    /// and horizontal seams while both axes are oversized.  Growing a
    /// picture is not a thing seam removal can do, and a zero target
    /// would carve the picture out of existence; both are rejected.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), CarveError> {
        if new_width == 0
            || new_height == 0
            || new_width > self.width()
            || new_height > self.height()
        {
            return Err(CarveError::BadTargetSize {
                width: self.width(),
                height: self.height(),
                target_width: new_width,
                target_height: new_height,
            });
        }
        let mut direction = Orientation::Normal;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.flip();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Normal)?;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Transposed)?;
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Orientation) -> Result<(), CarveError> {
        match direction {
            Orientation::Normal => {
                let seam = self.find_vertical_seam();
                self.remove_vertical_seam(&seam)?;
            }
            Orientation::Transposed => {
                let seam = self.find_horizontal_seam();
                self.remove_horizontal_seam(&seam)?;
            }
        }
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }

    // Bring the stored grids into the requested layout.  Consecutive
    // same-orientation operations pay nothing; only an actual switch
    // costs a transpose.
    fn align(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.picture = transpose_picture(&self.picture);
            self.energy = self.energy.transposed();
            self.orientation = orientation;
        }
    }

    // Remove a validated seam from the stored picture and compact the
    // energy field to match.  Runs in whatever layout `align` left;
    // the seam is always column-per-row here.
    fn excise(&mut self, seam: &[u32]) {
        let (width, height) = self.picture.dimensions();
        let mut shrunk = RgbImage::new(width - 1, height);
        for y in 0..height {
            let gap = seam[y as usize];
            for x in 0..width {
                if x == gap {
                    continue;
                }
                shrunk.put_pixel(cq!(x < gap, x, x - 1), y, *self.picture.get_pixel(x, y));
            }
        }
        self.picture = shrunk;
        self.energy.remove_seam(&self.picture, seam);
    }
}

fn validate_seam(seam: &[u32], expected_len: u32, limit: u32) -> Result<(), CarveError> {
    if seam.len() != expected_len as usize {
        return Err(CarveError::SeamLength {
            expected: expected_len,
            actual: seam.len(),
        });
    }
    let mut previous = seam[0];
    for (index, &entry) in seam.iter().enumerate() {
        if entry >= limit {
            return Err(CarveError::SeamEntryOutOfRange { index, entry, limit });
        }
        if (i64::from(entry) - i64::from(previous)).abs() > 1 {
            return Err(CarveError::SeamNotConnected {
                index,
                previous,
                entry,
            });
        }
        previous = entry;
    }
    Ok(())
}

/// The one-call entry point: copy the picture, carve it down to the
/// requested dimensions, hand back the result.
pub fn seamcarve(
    picture: &RgbImage,
    new_width: u32,
    new_height: u32,
) -> Result<RgbImage, CarveError> {
    let mut carver = SeamCarver::new(picture.clone())?;
    carver.carve(new_width, new_height)?;
    Ok(carver.into_picture())
}
