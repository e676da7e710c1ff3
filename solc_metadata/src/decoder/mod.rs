//!
//! The strict CBOR metadata decoder.
//!

pub mod error;

use self::error::Error;

///
/// Decodes exactly one CBOR value spanning the whole `payload`.
///
/// The value shape is not checked here, so any well-formed item is accepted,
/// including nested maps, arrays, tags and indefinite-length encodings.
///
pub fn decode_one(payload: &[u8]) -> Result<ciborium::Value, Error> {
    if payload.is_empty() {
        return Err(Error::Empty);
    }

    let mut reader = payload;
    let value: ciborium::Value = ciborium::de::from_reader(&mut reader)?;
    if !reader.is_empty() {
        return Err(Error::TrailingBytes {
            consumed: payload.len() - reader.len(),
            remaining: reader.len(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use ciborium::Value;

    use super::error::Error;

    #[test]
    fn map() {
        // {"solc": h'000809'}
        let payload = hex::decode("a164736f6c6343000809").expect("Always valid");

        let result = super::decode_one(payload.as_slice());

        assert_eq!(
            result,
            Ok(Value::Map(vec![(
                Value::Text("solc".to_owned()),
                Value::Bytes(vec![0, 8, 9]),
            )]))
        );
    }

    #[test]
    fn map_indefinite_length() {
        // {_ "solc": h'000809'}
        let payload = hex::decode("bf64736f6c6343000809ff").expect("Always valid");

        let result = super::decode_one(payload.as_slice());

        assert_eq!(
            result,
            Ok(Value::Map(vec![(
                Value::Text("solc".to_owned()),
                Value::Bytes(vec![0, 8, 9]),
            )]))
        );
    }

    #[test]
    fn scalar() {
        assert_eq!(super::decode_one(&[0x18, 0x2a]), Ok(Value::Integer(42u8.into())));
    }

    #[test]
    fn error_empty() {
        assert_eq!(super::decode_one(&[]), Err(Error::Empty));
    }

    #[test]
    fn error_all_zeros() {
        assert_eq!(
            super::decode_one(&[0x00; 8]),
            Err(Error::TrailingBytes {
                consumed: 1,
                remaining: 7,
            })
        );
    }

    #[test]
    fn error_trailing_bytes() {
        let payload = hex::decode("a164736f6c6343000809aabb").expect("Always valid");

        assert_eq!(
            super::decode_one(payload.as_slice()),
            Err(Error::TrailingBytes {
                consumed: 10,
                remaining: 2,
            })
        );
    }

    #[test]
    fn error_truncated() {
        let payload = hex::decode("a164736f6c63430008").expect("Always valid");

        assert!(matches!(
            super::decode_one(payload.as_slice()),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn error_unexpected_break() {
        assert!(matches!(
            super::decode_one(&[0xff]),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn error_invalid_utf8_key() {
        // {"\xff": 1}
        assert!(matches!(
            super::decode_one(&[0xa1, 0x61, 0xff, 0x01]),
            Err(Error::Malformed(_))
        ));
    }
}
