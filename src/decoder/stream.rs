use super::common::utils::{read_length, skip, skip_blob, skip_blobs, skip_millisecond_time};
use crate::constants::constant::STREAM_ID_SIZE;
use crate::types::RdbOk;
use std::io::Read;

/// Walks a stream value. `stream_version` is 1, 2 or 3 for
/// STREAM_LIST_PACKS, STREAM_LIST_PACKS_2 and STREAM_LIST_PACKS_3.
pub fn skip_stream_list_packs<R: Read + ?Sized>(input: &mut R, stream_version: u8) -> RdbOk {
    // (master id, listpack) per node
    let list_packs = read_length(input)?;
    for _ in 0..list_packs {
        skip_blobs(input, 2)?;
    }

    // length, last id ms, last id seq
    skip_lengths(input, 3)?;
    if stream_version >= 2 {
        // first id, max deleted id, entries added
        skip_lengths(input, 5)?;
    }

    let groups = read_length(input)?;
    for _ in 0..groups {
        skip_consumer_group(input, stream_version)?;
    }

    Ok(())
}

fn skip_consumer_group<R: Read + ?Sized>(input: &mut R, stream_version: u8) -> RdbOk {
    skip_blob(input)?;
    // last delivered id ms, seq
    skip_lengths(input, 2)?;
    if stream_version >= 2 {
        // entries read
        read_length(input)?;
    }

    let group_pel = read_length(input)?;
    for _ in 0..group_pel {
        skip(input, STREAM_ID_SIZE)?;
        // delivery time, delivery count
        skip_millisecond_time(input)?;
        read_length(input)?;
    }

    let consumers = read_length(input)?;
    for _ in 0..consumers {
        skip_blob(input)?;
        // seen time
        skip_millisecond_time(input)?;
        if stream_version >= 3 {
            // active time
            skip_millisecond_time(input)?;
        }

        let consumer_pel = read_length(input)?;
        for _ in 0..consumer_pel {
            skip(input, STREAM_ID_SIZE)?;
        }
    }

    Ok(())
}

fn skip_lengths<R: Read + ?Sized>(input: &mut R, count: usize) -> RdbOk {
    for _ in 0..count {
        read_length(input)?;
    }
    Ok(())
}
