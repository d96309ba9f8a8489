////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

//! Incremental nearest-offset match search for a fixed origin position.
//!
//! For a fixed `i`, as `rdl` increases from 3 upward, tracks the smallest
//! back-offset `rdo` such that the `rdl` bytes at `i-rdo..i-rdo+rdl` equal
//! the `rdl` bytes at `i..i+rdl`. A smaller offset can only ever enable the
//! same opcode form or a cheaper one (the short/medium/long forms are
//! nested by offset range), so taking the smallest valid offset at each
//! length is never worse than any larger one; this is the brute-force
//! search, not a hash-indexed approximation of it.

use crate::command::LONG_OFFSET_MAX;

pub(crate) struct MatchFinder {
    rdo: u32,
}

impl MatchFinder {
    pub(crate) fn new() -> Self {
        Self { rdo: 0 }
    }

    /// Advances the search to `rdl`, returning the smallest valid `rdo` for
    /// this origin `i`, or `None` once the window is exhausted (at which
    /// point no larger `rdl` can be satisfied either, so the caller should
    /// stop iterating `rdl` for this `i`).
    pub(crate) fn advance(&mut self, input: &[u8], i: usize, rdl: usize) -> Option<u32> {
        let still_valid = rdl != 3
            && self.rdo != 0
            && input[i - self.rdo as usize + rdl - 1] == input[i + rdl - 1];

        if !still_valid {
            loop {
                self.rdo += 1;
                if self.rdo as usize > i || self.rdo > LONG_OFFSET_MAX {
                    return None;
                }
                let candidate_start = i - self.rdo as usize;
                if input[candidate_start..candidate_start + rdl] == input[i..i + rdl] {
                    break;
                }
            }
        }

        Some(self.rdo)
    }
}
