use super::common::utils::{read_length, skip_binary_double, skip_blob, skip_double};
use crate::types::RdbOk;
use std::io::Read;

/// Sorted set as (member, score) pairs. ZSET_2 stores scores as little-endian
/// binary doubles, the original format as length-prefixed text.
pub fn skip_sorted_set<R: Read + ?Sized>(input: &mut R, is_zset2: bool) -> RdbOk {
    let mut set_items = read_length(input)?;

    while set_items > 0 {
        skip_blob(input)?;

        if is_zset2 {
            skip_binary_double(input)?;
        } else {
            skip_double(input)?;
        }

        set_items -= 1;
    }

    Ok(())
}
