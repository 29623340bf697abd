use super::{hash, list, module, sorted_set, stream};
use super::common::utils::skip_blob;
use std::io::Read;

use crate::constants::encoding_type;
use crate::module::ModuleRegistry;
use crate::types::{RdbError, RdbOk};

/// Walks the value of `value_type`, consuming exactly its bytes.
pub(crate) fn read_type<R: Read>(
    input: &mut R,
    value_type: u8,
    modules: &ModuleRegistry,
) -> RdbOk {
    match value_type {
        encoding_type::STRING => skip_blob(input),
        encoding_type::LIST | encoding_type::SET => list::skip_linked_list(input),
        encoding_type::ZSET => sorted_set::skip_sorted_set(input, false),
        encoding_type::ZSET_2 => sorted_set::skip_sorted_set(input, true),
        encoding_type::HASH => hash::skip_hash(input),
        // packed encodings are a single blob, trusted as written
        encoding_type::HASH_ZIPMAP
        | encoding_type::LIST_ZIPLIST
        | encoding_type::SET_INTSET
        | encoding_type::ZSET_ZIPLIST
        | encoding_type::HASH_ZIPLIST
        | encoding_type::HASH_LIST_PACK
        | encoding_type::ZSET_LIST_PACK
        | encoding_type::SET_LIST_PACK => skip_blob(input),
        encoding_type::LIST_QUICKLIST => list::skip_quicklist(input),
        encoding_type::LIST_QUICKLIST_2 => list::skip_quicklist_2(input),
        encoding_type::MODULE => module::skip_module(input, modules, 1),
        encoding_type::MODULE_2 => module::skip_module(input, modules, 2),
        encoding_type::STREAM_LIST_PACKS => stream::skip_stream_list_packs(input, 1),
        encoding_type::STREAM_LIST_PACKS_2 => stream::skip_stream_list_packs(input, 2),
        encoding_type::STREAM_LIST_PACKS_3 => stream::skip_stream_list_packs(input, 3),
        unknown_type => Err(RdbError::UnknownEncoding(unknown_type)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case::string(encoding_type::STRING, vec![3, b'b', b'a', b'r'])]
    #[case::list(encoding_type::LIST, vec![2, 1, b'a', 1, b'b'])]
    #[case::set(encoding_type::SET, vec![1, 0xC0, 0x01])]
    #[case::zset(encoding_type::ZSET, vec![1, 1, b'a', 1, b'2'])]
    #[case::zset_2(encoding_type::ZSET_2, vec![1, 1, b'a', 0, 0, 0, 0, 0, 0, 0, 0x40])]
    #[case::hash(encoding_type::HASH, vec![1, 1, b'f', 1, b'v'])]
    #[case::zipmap(encoding_type::HASH_ZIPMAP, vec![2, 0, 0xFF])]
    #[case::ziplist(encoding_type::LIST_ZIPLIST, vec![3, 0xAA, 0xBB, 0xFF])]
    #[case::intset(encoding_type::SET_INTSET, vec![2, 0x02, 0x00])]
    #[case::zset_ziplist(encoding_type::ZSET_ZIPLIST, vec![1, 0xFF])]
    #[case::hash_ziplist(encoding_type::HASH_ZIPLIST, vec![1, 0xFF])]
    #[case::hash_listpack(encoding_type::HASH_LIST_PACK, vec![1, 0xFF])]
    #[case::zset_listpack(encoding_type::ZSET_LIST_PACK, vec![1, 0xFF])]
    #[case::set_listpack(encoding_type::SET_LIST_PACK, vec![1, 0xFF])]
    #[case::quicklist(encoding_type::LIST_QUICKLIST, vec![2, 1, 0xFF, 1, 0xFF])]
    #[case::quicklist_2(encoding_type::LIST_QUICKLIST_2, vec![1, 2, 1, 0xFF])]
    #[case::module_2(encoding_type::MODULE_2, vec![0, 2, 1, 0])]
    #[case::stream(encoding_type::STREAM_LIST_PACKS, vec![0, 0, 0, 0, 0])]
    #[case::stream_2(encoding_type::STREAM_LIST_PACKS_2, vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0])]
    #[case::stream_3(encoding_type::STREAM_LIST_PACKS_3, vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0])]
    fn test_read_type_consumes_value(#[case] value_type: u8, #[case] data: Vec<u8>) {
        let mut data = data;
        let expected_position = data.len() as u64;
        data.push(0xEE);

        let mut cursor = Cursor::new(data);
        read_type(&mut cursor, value_type, &ModuleRegistry::new()).unwrap();
        assert_eq!(expected_position, cursor.position());
    }

    #[test]
    fn test_read_type_rejects_unknown() {
        let mut cursor = Cursor::new(vec![0]);
        assert!(matches!(
            read_type(&mut cursor, 8, &ModuleRegistry::new()),
            Err(RdbError::UnknownEncoding(8))
        ));
    }
}
