////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

#![warn(clippy::pedantic, clippy::cargo)]
// Due to the high amount of byte conversions, sometimes intentional lossy conversions are necessary.
#![allow(clippy::cast_possible_truncation)]
// too many lines is a dumb metric
#![allow(clippy::too_many_lines)]

//! A brute-force encoder for the RefPack compression format used by a
//! number of early 2000s EA game titles (The Sims, SimCity 4, Spore).
//!
//! Unlike most RefPack implementations, which trade a small amount of
//! compression ratio for speed, this crate always finds the provably
//! smallest possible encoding for a given input, at the cost of running a
//! full shortest-path search over every input position. It is meant for
//! offline asset packaging, not for compressing data on a hot path.
//!
//! ```
//! let input = b"Hello, hello, hello!";
//! let compressed = refpack_optimal::easy_compress(input).unwrap();
//! assert_eq!(&compressed[0..2], &[0x10, 0xFB]);
//! ```

pub mod command;
mod compress;
pub mod error;
pub mod header;

pub use crate::command::Command;
pub use crate::compress::{compress, easy_compress};
pub use crate::error::RefPackError;

#[cfg(test)]
mod decode;
