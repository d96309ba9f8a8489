////////////////////////////////////////////////////////////////////////////////
// This Source Code Form is subject to the terms of the Mozilla Public         /
// License, v. 2.0. If a copy of the MPL was not distributed with this         /
// file, You can obtain one at https://mozilla.org/MPL/2.0/.                   /
//                                                                             /
////////////////////////////////////////////////////////////////////////////////

//! The 5-byte RefPack frame header: a 2-byte magic followed by the
//! decompressed size as a big-endian 24-bit integer.
//!
//! This is the earliest "reference" RefPack header, as opposed to the
//! longer headers (extra compressed-length field, flag bytes, etc.) used by
//! later EA titles; those container formats are a different concern from
//! the minimal-size encoder this crate implements.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{RefPackError, RefPackResult};

/// RefPack magic number, written big-endian as the first two bytes of
/// every stream.
pub const MAGIC: u16 = 0x10FB;

/// Length in bytes of the header this crate writes.
pub const HEADER_LEN: usize = 5;

/// Largest decompressed size representable by the header's 24-bit size field.
pub const MAX_DECOMPRESSED_SIZE: usize = (1 << 24) - 1;

/// Writes the 5-byte RefPack header for a stream decompressing to `insize` bytes.
///
/// # Errors
/// - [`RefPackError::InputTooLarge`] if `insize` exceeds [`MAX_DECOMPRESSED_SIZE`].
/// - [`RefPackError::Io`] on a generic IO error.
pub fn write(insize: usize, writer: &mut impl Write) -> RefPackResult<()> {
    if insize > MAX_DECOMPRESSED_SIZE {
        return Err(RefPackError::InputTooLarge {
            insize,
            max: MAX_DECOMPRESSED_SIZE,
        });
    }
    writer.write_u16::<BigEndian>(MAGIC)?;
    writer.write_u24::<BigEndian>(insize as u32)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn writes_magic_and_size() {
        let mut buf = Cursor::new(vec![]);
        write(0x0102_03_usize.min(MAX_DECOMPRESSED_SIZE), &mut buf).unwrap();
        let bytes = buf.into_inner();
        assert_eq!(&bytes[0..2], &[0x10, 0xFB]);
    }

    #[test]
    fn empty_input_header() {
        let mut buf = Cursor::new(vec![]);
        write(0, &mut buf).unwrap();
        assert_eq!(buf.into_inner(), vec![0x10, 0xFB, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn rejects_oversized_input() {
        let mut buf = Cursor::new(vec![]);
        let err = write(MAX_DECOMPRESSED_SIZE + 1, &mut buf).unwrap_err();
        assert!(matches!(err, RefPackError::InputTooLarge { .. }));
    }
}
