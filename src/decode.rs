////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

//! A reference decoder used only to check round-trip correctness in tests.
//!
//! This crate does not expose decompression as part of its public API: the
//! only thing that matters for the encoder's correctness is that some
//! decoder can recover the original bytes, and the bit layouts in
//! [`crate::command`] are exactly those of the well-known RefPack format.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::command::Command;
use crate::error::{RefPackError, RefPackResult};
use crate::header::MAGIC;

/// Decompresses a complete RefPack stream back to the original bytes.
pub(crate) fn easy_decompress(input: &[u8]) -> RefPackResult<Vec<u8>> {
    let mut reader = Cursor::new(input);

    let magic = reader.read_u16::<BigEndian>()?;
    if magic != MAGIC {
        return Err(RefPackError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("bad magic {magic:#06x}"),
        )));
    }
    let decompressed_len = reader.read_u24::<BigEndian>()? as usize;

    let mut out = Vec::with_capacity(decompressed_len);
    loop {
        let command = Command::read(&mut reader)?;
        let mut literal = vec![0u8; command.literal_len() as usize];
        reader.read_exact(&mut literal)?;
        out.extend_from_slice(&literal);

        let copy_len = command.copy_len() as usize;
        if copy_len > 0 {
            let offset = copy_offset(command);
            let start = out.len() - offset;
            for i in 0..copy_len {
                let byte = out[start + i];
                out.push(byte);
            }
        }

        if matches!(command, Command::Stop(_)) {
            break;
        }
    }

    debug_assert_eq!(out.len(), decompressed_len);
    Ok(out)
}

fn copy_offset(command: Command) -> usize {
    match command {
        Command::Short { offset, .. } | Command::Medium { offset, .. } | Command::Long { offset, .. } => {
            offset as usize
        }
        Command::Literal(_) | Command::Stop(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::easy_compress;

    #[test]
    fn round_trips_repeated_text() {
        let input = b"the quick brown fox the quick brown fox".to_vec();
        let compressed = easy_compress(&input).unwrap();
        let decompressed = easy_decompress(&compressed).unwrap();
        assert_eq!(input, decompressed);
    }

    #[test]
    fn round_trips_empty_input() {
        let compressed = easy_compress(&[]).unwrap();
        assert_eq!(easy_decompress(&compressed).unwrap(), Vec::<u8>::new());
    }
}
