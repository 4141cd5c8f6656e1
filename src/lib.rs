// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing ("seam carving")
//!
//! A [`SeamCarver`] repeatedly finds and removes the path of pixels
//! -- one per row, or one per column -- whose removal does the least
//! visual damage, judged by a color-gradient energy function.  The
//! same dynamic program serves both orientations via a lazy
//! transpose, and the energy field is patched incrementally after
//! every removal rather than recomputed.

mod ternary;

pub mod carver;
pub mod dump;
pub mod energy;
pub mod error;
pub mod grid;
pub mod seam;
pub mod transpose;

pub use carver::{seamcarve, SeamCarver};
pub use energy::{EnergyField, BOUNDARY_ENERGY};
pub use error::CarveError;
