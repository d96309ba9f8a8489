////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

//! Ties the match finder, the DP optimizer and the emitter together into the
//! public compression entry points.

mod emit;
mod match_finder;
mod optimize;

use std::io::{Cursor, Read, Write};

use crate::error::RefPackResult;
use crate::header;

/// Largest input this crate will attempt to encode without going through the
/// DP search: below this size no back-reference is possible anyway (the
/// shortest copy command needs 3 bytes of prior context), so the stream is
/// just the header followed by a stop opcode and the literal bytes verbatim.
const MIN_SEARCHABLE_LEN: usize = 3;

fn compress_degenerate(input: &[u8]) -> RefPackResult<Vec<u8>> {
    let insize = input.len();
    debug_assert!(insize < MIN_SEARCHABLE_LEN);

    let mut out = Vec::with_capacity(header::HEADER_LEN + 1 + insize);
    header::write(insize, &mut out)?;
    out.push(0xFC | insize as u8);
    out.extend_from_slice(input);
    Ok(out)
}

fn compress_buf(input: &[u8]) -> RefPackResult<Vec<u8>> {
    if input.len() > header::MAX_DECOMPRESSED_SIZE {
        return Err(crate::error::RefPackError::InputTooLarge {
            insize: input.len(),
            max: header::MAX_DECOMPRESSED_SIZE,
        });
    }
    if input.len() < MIN_SEARCHABLE_LEN {
        return compress_degenerate(input);
    }
    let states = optimize::run(input)?;
    emit::build(input, &states)
}

/// Reads `length` uncompressed bytes from `reader` and writes the minimal
/// RefPack-encoded stream to `writer`.
///
/// # Errors
/// Returns [`RefPackError`](crate::error::RefPackError) on an IO failure or
/// if `length` exceeds what the header's size field can represent.
pub fn compress<R: Read, W: Write>(
    length: usize,
    reader: &mut R,
    writer: &mut W,
) -> RefPackResult<()> {
    let mut input = vec![0u8; length];
    reader.read_exact(&mut input)?;
    let out = compress_buf(&input)?;
    writer.write_all(&out)?;
    writer.flush()?;
    Ok(())
}

/// Wrapped [`compress`] with a simpler slice-in, `Vec`-out signature.
///
/// # Errors
/// Returns [`RefPackError`](crate::error::RefPackError) on an IO failure or
/// if `input.len()` exceeds what the header's size field can represent.
pub fn easy_compress(input: &[u8]) -> RefPackResult<Vec<u8>> {
    let mut reader = Cursor::new(input);
    let mut writer: Cursor<Vec<u8>> = Cursor::new(vec![]);
    compress(input.len(), &mut reader, &mut writer)?;
    Ok(writer.into_inner())
}
