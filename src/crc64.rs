//! CRC-64/Jones, the checksum Redis appends to RDB files and DUMP payloads.
//!
//! Reflected input and output, no final xor. `crc64(0, b"123456789")` is
//! `0xe9c6d914c4b8d9ca`.

/// Reflected form of the Jones polynomial 0xad93d23594c935a9.
const POLY: u64 = 0x95ac_9329_ac4b_c9b5;

static TABLE: [u64; 256] = make_table();

const fn make_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u64;
        let mut bit = 0;
        while bit < 8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Continues a checksum over `data`. Start with a seed of `0`.
pub fn crc64(crc: u64, data: &[u8]) -> u64 {
    data.iter().fold(crc, |crc, &byte| {
        TABLE[((crc ^ byte as u64) & 0xff) as usize] ^ (crc >> 8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"", 0)]
    #[case(b"123456789", 0xe9c6_d914_c4b8_d9ca)]
    fn test_crc64_vectors(#[case] data: &[u8], #[case] expected: u64) {
        assert_eq!(expected, crc64(0, data));
    }

    #[test]
    fn test_crc64_is_incremental() {
        let data = b"This is a test of the emergency broadcast system.";
        let (head, tail) = data.split_at(17);
        assert_eq!(crc64(0, data), crc64(crc64(0, head), tail));
    }

    #[test]
    fn test_table_matches_bitwise() {
        fn bitwise(data: &[u8]) -> u64 {
            let mut crc = 0u64;
            for &byte in data {
                crc ^= byte as u64;
                for _ in 0..8 {
                    crc = if crc & 1 == 1 { (crc >> 1) ^ POLY } else { crc >> 1 };
                }
            }
            crc
        }

        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        assert_eq!(bitwise(&data), crc64(0, &data));
    }
}
