//!
//! The bytecode metadata trailer.
//!
//! The trailer is laid out as `<code> <payload> <payload length: u16 big-endian>`.
//!

pub mod error;

use crate::METADATA_LENGTH_SIZE;

use self::error::Error;

///
/// Reads the metadata length from the last two bytes of `bytecode`.
///
pub fn read_metadata_length(bytecode: &[u8]) -> Result<u16, Error> {
    let offset = bytecode
        .len()
        .checked_sub(METADATA_LENGTH_SIZE)
        .ok_or(Error::BytecodeTooShort {
            length: bytecode.len(),
        })?;
    Ok(u16::from_be_bytes([bytecode[offset], bytecode[offset + 1]]))
}

///
/// Returns the `length` bytes immediately preceding the length field.
///
/// Fails instead of clamping if the length points outside of `bytecode`.
///
pub fn slice_metadata_payload(bytecode: &[u8], length: u16) -> Result<&[u8], Error> {
    let end = bytecode
        .len()
        .checked_sub(METADATA_LENGTH_SIZE)
        .ok_or(Error::BytecodeTooShort {
            length: bytecode.len(),
        })?;
    let start = end
        .checked_sub(length as usize)
        .ok_or(Error::LengthOutOfBounds {
            declared: length,
            available: end,
        })?;
    Ok(&bytecode[start..end])
}

///
/// Reads the length field and slices the metadata payload.
///
pub fn metadata_payload(bytecode: &[u8]) -> Result<&[u8], Error> {
    let length = read_metadata_length(bytecode)?;
    tracing::debug!(length, "Read metadata length");
    slice_metadata_payload(bytecode, length)
}

#[cfg(test)]
mod tests {
    use super::error::Error;

    #[test]
    fn length_big_endian() {
        assert_eq!(super::read_metadata_length(&[0xfe, 0x00, 0x33]), Ok(0x0033));
        assert_eq!(super::read_metadata_length(&[0x01, 0x02]), Ok(0x0102));
        assert_eq!(super::read_metadata_length(&[0xff, 0xff]), Ok(u16::MAX));
    }

    #[test]
    fn length_bytecode_too_short() {
        assert_eq!(
            super::read_metadata_length(&[]),
            Err(Error::BytecodeTooShort { length: 0 })
        );
        assert_eq!(
            super::read_metadata_length(&[0x33]),
            Err(Error::BytecodeTooShort { length: 1 })
        );
    }

    #[test]
    fn payload_precedes_length_field() {
        let bytecode = [0x60, 0x80, 0xaa, 0xbb, 0xcc, 0x00, 0x03];
        assert_eq!(
            super::slice_metadata_payload(&bytecode, 3),
            Ok(&[0xaa, 0xbb, 0xcc][..])
        );
    }

    #[test]
    fn payload_spans_whole_prefix() {
        let bytecode = [0xaa, 0xbb, 0x00, 0x02];
        assert_eq!(
            super::metadata_payload(&bytecode),
            Ok(&[0xaa, 0xbb][..])
        );
    }

    #[test]
    fn payload_empty() {
        let bytecode = [0x60, 0x80, 0x00, 0x00];
        assert_eq!(super::metadata_payload(&bytecode), Ok(&[][..]));
    }

    #[test]
    fn payload_length_out_of_bounds() {
        let bytecode = [0xaa, 0xbb, 0x00, 0x03];
        assert_eq!(
            super::metadata_payload(&bytecode),
            Err(Error::LengthOutOfBounds {
                declared: 3,
                available: 2,
            })
        );
    }

    #[test]
    fn payload_length_field_only() {
        assert_eq!(
            super::metadata_payload(&[0xff, 0xff]),
            Err(Error::LengthOutOfBounds {
                declared: u16::MAX,
                available: 0,
            })
        );
    }
}
