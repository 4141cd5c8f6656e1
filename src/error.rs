// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carver's error taxonomy
//!
//! Everything here is an invalid argument of one flavor or another,
//! detected before any state changes: the carver either performs an
//! operation completely or rejects it untouched.  There are no
//! retryable or asynchronous failures at this layer.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    #[fail(display = "picture must be at least one pixel wide and one pixel high")]
    EmptyPicture,

    #[fail(
        display = "coordinates ({}, {}) lie outside the {}x{} picture",
        x, y, width, height
    )]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[fail(
        display = "cannot remove a vertical seam from a picture only {} column(s) wide",
        width
    )]
    TooNarrow { width: u32 },

    #[fail(
        display = "cannot remove a horizontal seam from a picture only {} row(s) high",
        height
    )]
    TooShort { height: u32 },

    #[fail(display = "seam has {} entries where {} were expected", actual, expected)]
    SeamLength { expected: u32, actual: usize },

    #[fail(
        display = "seam entry {} at position {} is outside the valid range 0..{}",
        entry, index, limit
    )]
    SeamEntryOutOfRange { index: usize, entry: u32, limit: u32 },

    #[fail(
        display = "seam steps from {} to {} at position {}; adjacent entries may differ by at most 1",
        previous, entry, index
    )]
    SeamNotConnected { index: usize, previous: u32, entry: u32 },

    #[fail(
        display = "cannot carve a {}x{} picture down to {}x{}",
        width, height, target_width, target_height
    )]
    BadTargetSize {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}
