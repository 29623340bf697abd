//! The DUMP payload layout RESTORE expects:
//! `[type][value bytes][version: u16 LE][crc64 LE over everything before it]`.

use byteorder::{ByteOrder, LittleEndian};

use crate::crc64::crc64;
use crate::types::{RdbError, RdbResult};

/// Type byte, two version bytes and the checksum.
pub const MIN_PAYLOAD_LENGTH: usize = 11;

/// Appends version and checksum trailer to a capture buffer that already
/// starts with the type byte.
pub fn assemble(mut buffer: Vec<u8>, version: u8) -> Vec<u8> {
    buffer.reserve(10);
    buffer.push(version);
    buffer.push(0x00);
    let checksum = crc64(0, &buffer);
    buffer.extend_from_slice(&checksum.to_le_bytes());
    buffer
}

#[derive(Debug, PartialEq, Eq)]
pub struct DumpPayload<'a> {
    pub value_type: u8,
    /// Serialized value, without type byte and trailer.
    pub body: &'a [u8],
    pub version: u16,
    pub checksum: u64,
}

/// Splits a payload into its parts, verifying the checksum.
pub fn parse_payload(payload: &[u8]) -> RdbResult<DumpPayload<'_>> {
    if payload.len() < MIN_PAYLOAD_LENGTH {
        return Err(RdbError::PayloadTooShort(payload.len()));
    }

    let (data, footer) = payload.split_at(payload.len() - 8);
    let expected = LittleEndian::read_u64(footer);
    let actual = crc64(0, data);
    if expected != actual {
        return Err(RdbError::ChecksumMismatch { expected, actual });
    }

    let (data, version) = data.split_at(data.len() - 2);
    Ok(DumpPayload {
        value_type: data[0],
        body: &data[1..],
        version: LittleEndian::read_u16(version),
        checksum: expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assemble_layout() {
        let payload = assemble(vec![0, 3, b'b', b'a', b'r'], 9);

        assert_eq!(5 + 1 + 1 + 8, payload.len());
        assert_eq!(&[0, 3, b'b', b'a', b'r', 9, 0], &payload[..7]);
        assert_eq!(&crc64(0, &payload[..7]).to_le_bytes()[..], &payload[7..]);
    }

    #[test]
    fn test_parse_payload() {
        let payload = assemble(vec![4, 1, 1, b'a', 1, b'b'], 11);
        let parsed = parse_payload(&payload).unwrap();

        assert_eq!(
            DumpPayload {
                value_type: 4,
                body: &[1, 1, b'a', 1, b'b'],
                version: 11,
                checksum: crc64(0, &payload[..8]),
            },
            parsed
        );
    }

    #[test]
    fn test_parse_payload_detects_corruption() {
        let mut payload = assemble(vec![0, 1, b'x'], 9);
        payload[2] = b'y';

        assert!(matches!(
            parse_payload(&payload),
            Err(RdbError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_payload_too_short() {
        assert!(matches!(
            parse_payload(&[0; 10]),
            Err(RdbError::PayloadTooShort(10))
        ));
    }
}
