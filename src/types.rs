use thiserror::Error;

use crate::constants::encoding_type;

#[derive(Error, Debug)]
pub enum RdbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown encoding type: {0}")]
    UnknownEncoding(u8),
    #[error("Parsing error in {context}: {message}")]
    ParsingError {
        context: &'static str,
        message: String,
    },
    #[error("No module decoder registered for {name}/{version} (RDB_TYPE_MODULE)")]
    UnregisteredModule { name: String, version: u32 },
    #[error("Module data for {name}/{version} is not terminated by the module EOF marker (found {found})")]
    MalformedModuleTrailer {
        name: String,
        version: u32,
        found: u64,
    },
    #[error("Invalid module name: {0:?}")]
    InvalidModuleName(String),
    #[error("Invalid module version: {0}")]
    InvalidModuleVersion(u32),
    #[error("Payload too short: {0} bytes")]
    PayloadTooShort(usize),
    #[error("Checksum mismatch: expected {expected:#018x}, got {actual:#018x}")]
    ChecksumMismatch { expected: u64, actual: u64 },
    #[error("Failed to dump key {key:?} (type {value_type}): {source}")]
    Value {
        key: String,
        value_type: u8,
        #[source]
        source: Box<RdbError>,
    },
    #[error("Failed to read key (type {value_type}): {source}")]
    Key {
        value_type: u8,
        #[source]
        source: Box<RdbError>,
    },
}

impl RdbError {
    pub(crate) fn for_value(self, key: &[u8], value_type: u8) -> RdbError {
        RdbError::Value {
            key: String::from_utf8_lossy(key).into_owned(),
            value_type,
            source: Box::new(self),
        }
    }

    pub(crate) fn for_key(self, value_type: u8) -> RdbError {
        RdbError::Key {
            value_type,
            source: Box::new(self),
        }
    }
}

pub type RdbResult<T> = Result<T, RdbError>;

pub type RdbOk = RdbResult<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    String,
    List,
    Set,
    SortedSet,
    Hash,
    Stream,
    Module,
}

impl Type {
    pub fn from_encoding(enc_type: u8) -> RdbResult<Type> {
        match enc_type {
            encoding_type::STRING => Ok(Type::String),
            encoding_type::HASH
            | encoding_type::HASH_ZIPMAP
            | encoding_type::HASH_ZIPLIST
            | encoding_type::HASH_LIST_PACK => Ok(Type::Hash),
            encoding_type::LIST
            | encoding_type::LIST_ZIPLIST
            | encoding_type::LIST_QUICKLIST
            | encoding_type::LIST_QUICKLIST_2 => Ok(Type::List),
            encoding_type::SET | encoding_type::SET_INTSET | encoding_type::SET_LIST_PACK => {
                Ok(Type::Set)
            }
            encoding_type::ZSET
            | encoding_type::ZSET_ZIPLIST
            | encoding_type::ZSET_2
            | encoding_type::ZSET_LIST_PACK => Ok(Type::SortedSet),
            encoding_type::STREAM_LIST_PACKS
            | encoding_type::STREAM_LIST_PACKS_2
            | encoding_type::STREAM_LIST_PACKS_3 => Ok(Type::Stream),
            encoding_type::MODULE | encoding_type::MODULE_2 => Ok(Type::Module),
            _ => Err(RdbError::UnknownEncoding(enc_type)),
        }
    }
}

/// Facts about a value that the surrounding RDB reader already knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueContext {
    /// RDB version the value was written at.
    pub rdb_version: u8,
    pub db: u32,
    pub expiry: Option<u64>,
}

impl ValueContext {
    pub fn new(rdb_version: u8) -> ValueContext {
        ValueContext {
            rdb_version,
            db: 0,
            expiry: None,
        }
    }
}

/// A key together with its value re-encoded as a DUMP payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpKeyValue {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
    /// Type code the value was stored with on disk.
    pub value_type: u8,
    pub db: u32,
    pub expiry: Option<u64>,
}
