use super::common::utils::{read_length, skip_blobs};
use crate::types::RdbOk;
use std::io::Read;

pub fn skip_hash<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    let mut hash_items = read_length(input)?;

    while hash_items > 0 {
        skip_blobs(input, 2)?;
        hash_items -= 1;
    }

    Ok(())
}
