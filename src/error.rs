////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

use onlyerror::Error;

/// Errors that can occur while compressing a buffer into a RefPack stream.
#[derive(Error, Debug)]
pub enum RefPackError {
    /// Generic IO error, only reachable via the `Read`/`Write` wrapper in
    /// [`crate::compress`]; the byte-slice entry point [`crate::easy_compress`]
    /// cannot fail this way.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The state table or output buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for the {what}")]
    Alloc {
        /// What was being allocated, for diagnostics.
        what: &'static str,
        /// The number of bytes that allocation was attempted for.
        requested: usize,
    },

    /// The finished stream's length does not fit in the format's size fields.
    #[error("encoded output size overflowed (body cost {body_cost}, max representable is {max})")]
    SizeOverflow {
        /// The computed body cost (in bytes) that could not be represented.
        body_cost: u64,
        /// The maximum representable value.
        max: u64,
    },

    /// The input is too large to be framed by a RefPack header, whose
    /// decompressed-size field is 24 bits wide.
    #[error("input of {insize} bytes exceeds the maximum encodable size of {max} bytes")]
    InputTooLarge {
        /// The size of the input that was rejected.
        insize: usize,
        /// The maximum encodable size (`2^24 - 1`).
        max: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type RefPackResult<T> = std::result::Result<T, RefPackError>;
