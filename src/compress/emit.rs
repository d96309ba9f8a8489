////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

//! Backtracks the settled state table into the final framed byte stream.

use std::io::Cursor;

use crate::command::COPY_LITERAL_MAX;
use crate::compress::optimize::{State, UNREACHABLE};
use crate::error::{RefPackError, RefPackResult};
use crate::header;

/// Picks the cheapest stop-command terminus: a `pdl_stop` in `0..=3` and
/// `t = insize - pdl_stop` minimizing `S[t].distance + pdl_stop`.
fn choose_stop(states: &[State], insize: usize) -> (usize, u32, u32) {
    let mut pdl_stop = 0u32;
    let mut t = insize;
    let mut best = states[insize].distance;

    let max_p = (COPY_LITERAL_MAX as usize).min(insize);
    for p in 1..=max_p {
        let candidate_t = insize - p;
        if let Some(candidate) = states[candidate_t].distance.checked_add(p as u32) {
            if candidate < best {
                best = candidate;
                pdl_stop = p as u32;
                t = candidate_t;
            }
        }
    }

    (t, pdl_stop, best)
}

/// Builds the complete RefPack stream for `input` given its settled state
/// table.
///
/// # Errors
/// - [`RefPackError::SizeOverflow`] if the computed output size does not fit
///   the internal `u32` size counter.
/// - [`RefPackError::InputTooLarge`] if `input.len()` exceeds the header's
///   24-bit size field.
pub(crate) fn build(input: &[u8], states: &[State]) -> RefPackResult<Vec<u8>> {
    let insize = input.len();
    let (t, pdl_stop, _) = choose_stop(states, insize);
    let body_distance = states[t].distance;
    debug_assert_ne!(body_distance, UNREACHABLE, "stop terminus must be settled");

    let body_cost = u64::from(body_distance);
    let outsize_u64 = header::HEADER_LEN as u64 + body_cost + 1 + u64::from(pdl_stop);
    if outsize_u64 > u64::from(u32::MAX) {
        return Err(RefPackError::SizeOverflow {
            body_cost,
            max: u64::from(u32::MAX),
        });
    }
    let outsize = outsize_u64 as usize;

    let mut out = Vec::new();
    out.try_reserve_exact(outsize).map_err(|_| RefPackError::Alloc {
        what: "output buffer",
        requested: outsize,
    })?;
    out.resize(outsize, 0u8);

    {
        let mut head: &mut [u8] = &mut out[..header::HEADER_LEN];
        header::write(insize, &mut head)?;
    }

    // Write the stop opcode and its trailing literal bytes at the very end.
    out[outsize - 1 - pdl_stop as usize] = 0xFC | pdl_stop as u8;
    out[outsize - pdl_stop as usize..outsize]
        .copy_from_slice(&input[insize - pdl_stop as usize..insize]);

    // Walk backwards from `t` to `0`, placing each command's opcode and its
    // preceding literal run.
    let mut i = t;
    while i != 0 {
        let command = states[i]
            .command
            .expect("every position reachable by the backtrack has an incoming command");
        let dist = states[i].distance as usize;
        let opcode_len = command.opcode_len() as usize;
        let pdl = command.literal_len() as usize;
        let rdl = command.copy_len() as usize;

        let opcode_start = header::HEADER_LEN + dist - pdl - opcode_len;
        {
            let mut cursor = Cursor::new(&mut out[opcode_start..opcode_start + opcode_len]);
            command.write(&mut cursor)?;
        }

        let literal_start = header::HEADER_LEN + dist - pdl;
        let src_start = i - rdl - pdl;
        out[literal_start..literal_start + pdl].copy_from_slice(&input[src_start..src_start + pdl]);

        i -= rdl + pdl;
    }

    Ok(out)
}
