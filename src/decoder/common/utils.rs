use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{self, Read};

use crate::constants::{constant, double, encoding};

#[doc(hidden)]
pub use crate::types::{RdbError, RdbOk, RdbResult};

pub fn read_length_with_encoding<R: Read + ?Sized>(input: &mut R) -> RdbResult<(u64, bool)> {
    let length;
    let mut is_encoded = false;

    let enc_type = input.read_u8()?;

    match (enc_type & 0xC0) >> 6 {
        constant::RDB_ENCVAL => {
            is_encoded = true;
            length = (enc_type & 0x3F) as u64;
        }
        constant::RDB_6BITLEN => {
            length = (enc_type & 0x3F) as u64;
        }
        constant::RDB_14BITLEN => {
            let next_byte = input.read_u8()?;
            length = (((enc_type & 0x3F) as u64) << 8) | next_byte as u64;
        }
        _ => match enc_type {
            constant::RDB_32BITLEN_PREFIX => {
                length = input.read_u32::<BigEndian>()? as u64;
            }
            constant::RDB_64BITLEN_PREFIX => {
                length = input.read_u64::<BigEndian>()?;
            }
            _ => {
                return Err(RdbError::ParsingError {
                    context: "read_length_with_encoding",
                    message: format!("Unknown length encoding: {:#04x}", enc_type),
                })
            }
        },
    }

    Ok((length, is_encoded))
}

pub fn read_length<R: Read + ?Sized>(input: &mut R) -> RdbResult<u64> {
    let (length, _) = read_length_with_encoding(input)?;
    Ok(length)
}

/// Reads an encoded string and returns its decoded bytes.
pub fn read_blob<R: Read + ?Sized>(input: &mut R) -> RdbResult<Vec<u8>> {
    let (length, is_encoded) = read_length_with_encoding(input)?;

    if is_encoded {
        let result = match length {
            encoding::INT8 => int_to_vec(i32::from(input.read_i8()?)),
            encoding::INT16 => int_to_vec(i32::from(input.read_i16::<LittleEndian>()?)),
            encoding::INT32 => int_to_vec(input.read_i32::<LittleEndian>()?),
            encoding::LZF => {
                let compressed_length = read_length(input)?;
                let real_length = read_length(input)?;
                let data = read_exact(input, compressed_length)?;
                if real_length > compressed_length.saturating_mul(constant::LZF_MAX_EXPANSION) {
                    return Err(RdbError::ParsingError {
                        context: "read_blob",
                        message: format!(
                            "LZF length {} cannot expand from {} compressed bytes",
                            real_length, compressed_length
                        ),
                    });
                }
                lzf::decompress(&data, real_length as usize).map_err(|e| {
                    RdbError::ParsingError {
                        context: "read_blob",
                        message: format!("LZF decompression failed: {:?}", e),
                    }
                })?
            }
            _ => {
                return Err(RdbError::ParsingError {
                    context: "read_blob",
                    message: format!("Unknown encoding value: {}", length),
                })
            }
        };

        Ok(result)
    } else {
        read_exact(input, length)
    }
}

pub fn int_to_vec(number: i32) -> Vec<u8> {
    number.to_string().into_bytes()
}

/// Reads `len` bytes. The buffer grows with the data actually read, so a
/// corrupt length fails with `UnexpectedEof` instead of a huge allocation.
pub fn read_exact<R: Read + ?Sized>(reader: &mut R, len: u64) -> RdbResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(constant::DEFAULT_CAPACITY as u64) as usize);
    let read = Read::take(&mut *reader, len).read_to_end(&mut buf)?;
    if (read as u64) < len {
        return Err(RdbError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} bytes, stream ended after {}", len, read),
        )));
    }

    Ok(buf)
}

/// Consumes exactly `skip_bytes` bytes.
pub fn skip<R: Read + ?Sized>(input: &mut R, skip_bytes: u64) -> RdbOk {
    let copied = io::copy(&mut Read::take(&mut *input, skip_bytes), &mut io::sink())?;
    if copied < skip_bytes {
        return Err(RdbError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} bytes, stream ended after {}", skip_bytes, copied),
        )));
    }
    Ok(())
}

/// Skips one string in any of its encodings (raw, integer or LZF).
pub fn skip_blob<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    let (len, is_encoded) = read_length_with_encoding(input)?;
    let skip_bytes;

    if is_encoded {
        skip_bytes = match len {
            encoding::INT8 => 1,
            encoding::INT16 => 2,
            encoding::INT32 => 4,
            encoding::LZF => {
                let compressed_length = read_length(input)?;
                let _real_length = read_length(input)?;
                compressed_length
            }
            _ => {
                return Err(RdbError::ParsingError {
                    context: "skip_blob",
                    message: format!("Unknown encoding value: {}", len),
                });
            }
        }
    } else {
        skip_bytes = len;
    }

    skip(input, skip_bytes)
}

/// Skips a double in the old text form: a length byte followed by ASCII digits.
pub fn skip_double<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    let len = input.read_u8()?;
    match len {
        double::NAN | double::POS_INF | double::NEG_INF => Ok(()),
        _ => skip(input, len as u64),
    }
}

pub fn skip_binary_double<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    skip(input, 8)
}

pub fn skip_binary_float<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    skip(input, 4)
}

pub fn skip_millisecond_time<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    skip(input, 8)
}

/// Skips `count` encoded strings.
pub fn skip_blobs<R: Read + ?Sized>(input: &mut R, count: u64) -> RdbOk {
    for _ in 0..count {
        skip_blob(input)?;
    }
    Ok(())
}
