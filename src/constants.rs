pub mod constant {
    pub const RDB_6BITLEN: u8 = 0;
    pub const RDB_14BITLEN: u8 = 1;
    pub const RDB_32BITLEN: u8 = 2;
    pub const RDB_ENCVAL: u8 = 3;

    // Full first byte of the two wide length forms (both carry the RDB_32BITLEN tag)
    pub const RDB_32BITLEN_PREFIX: u8 = 0x80;
    pub const RDB_64BITLEN_PREFIX: u8 = 0x81;

    /// Initial capacity of a capture buffer.
    pub const DEFAULT_CAPACITY: usize = 8192;

    /// Size of a raw stream id (ms + seq, both 64-bit) as written in a PEL.
    pub const STREAM_ID_SIZE: u64 = 16;

    /// Upper bound on LZF output per input byte: a 3-byte back reference
    /// expands to at most 264 bytes.
    pub const LZF_MAX_EXPANSION: u64 = 88;
}

#[allow(dead_code)]
pub mod encoding_type {
    pub const STRING: u8 = 0;
    pub const LIST: u8 = 1;
    pub const SET: u8 = 2;
    pub const ZSET: u8 = 3;
    pub const HASH: u8 = 4;
    pub const ZSET_2: u8 = 5;
    pub const MODULE: u8 = 6;
    pub const MODULE_2: u8 = 7;
    pub const HASH_ZIPMAP: u8 = 9;
    pub const LIST_ZIPLIST: u8 = 10;
    pub const SET_INTSET: u8 = 11;
    pub const ZSET_ZIPLIST: u8 = 12;
    pub const HASH_ZIPLIST: u8 = 13;
    pub const LIST_QUICKLIST: u8 = 14;
    pub const STREAM_LIST_PACKS: u8 = 15;
    pub const HASH_LIST_PACK: u8 = 16;
    pub const ZSET_LIST_PACK: u8 = 17;
    pub const LIST_QUICKLIST_2: u8 = 18;
    pub const STREAM_LIST_PACKS_2: u8 = 19;
    pub const SET_LIST_PACK: u8 = 20;
    pub const STREAM_LIST_PACKS_3: u8 = 21;
}

pub mod encoding {
    pub const INT8: u64 = 0;
    pub const INT16: u64 = 1;
    pub const INT32: u64 = 2;
    pub const LZF: u64 = 3;
}

/// Special length bytes of a text-encoded double.
pub mod double {
    pub const NAN: u8 = 253;
    pub const POS_INF: u8 = 254;
    pub const NEG_INF: u8 = 255;
}

pub mod module {
    /// Symbols of a packed module name, 6 bits each.
    pub const MODULE_SET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    pub const NAME_LENGTH: usize = 9;
    pub const VERSION_BITS: u32 = 10;
    pub const VERSION_MASK: u64 = 1023;

    pub const OPCODE_EOF: u64 = 0;
    pub const OPCODE_SINT: u64 = 1;
    pub const OPCODE_UINT: u64 = 2;
    pub const OPCODE_FLOAT: u64 = 3;
    pub const OPCODE_DOUBLE: u64 = 4;
    pub const OPCODE_STRING: u64 = 5;
}
