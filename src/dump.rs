// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a grayscale image
//!
//! Handy for eyeballing what the solver is going to chew through:
//! bright pixels are expensive, dark pixels are where seams will go.

use crate::energy::EnergyField;
use image::{GrayImage, Luma, Pixel};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

/// Scale the field to the 0..255 range against its own peak and
/// return it as a grayscale image of the same dimensions.
pub fn energy_to_image(energy: &EnergyField) -> GrayImage {
    let (width, height) = (energy.width(), energy.height());
    let peak = iproduct!(0..height, 0..width)
        .map(|(y, x)| energy.at(x, y))
        .fold(f64::MIN, f64::max)
        .max(1.0);
    let mut out = GrayImage::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let level = clamp((energy.at(x, y) * 255.0 / peak).round(), 0.0, 255.0);
        let cs = [NumCast::from(level).unwrap()];
        out.put_pixel(x, y, *Luma::from_slice(&cs));
    }
    out
}
