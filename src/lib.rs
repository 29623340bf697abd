//! Transcode values from a Redis RDB stream into DUMP payloads.
//!
//! A [`DumpDecoder`] reads one key and value at a time from any
//! [`Read`](std::io::Read) positioned right after the value's type byte. It
//! walks the value's encoding just far enough to know where it ends, captures
//! the raw bytes on the way and appends the version and CRC-64 trailer, giving
//! exactly what `RESTORE` accepts.
//!
//! ```
//! use std::io::Cursor;
//! use rdb_dump::{constants::encoding_type, DumpConfig, DumpDecoder, ModuleRegistry, ValueContext};
//!
//! let decoder = DumpDecoder::new(DumpConfig::default(), ModuleRegistry::new());
//! let mut input = Cursor::new(b"\x03foo\x03bar".to_vec());
//!
//! let record = decoder
//!     .read_value(&mut input, encoding_type::STRING, &ValueContext::new(9))
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(b"foo", &record.key[..]);
//! assert_eq!(b"\x00\x03bar\x09\x00", &record.value[..7]);
//! ```

pub mod config;
pub mod constants;
pub mod crc64;
pub mod decoder;
pub mod filter;
pub mod module;
pub mod payload;
pub mod sink;
pub mod types;

pub use config::DumpConfig;
pub use decoder::{CaptureReader, DumpDecoder};
pub use module::{ModuleDecoder, ModuleId, ModuleRegistry};
pub use sink::DumpSink;
pub use types::{DumpKeyValue, RdbError, RdbOk, RdbResult, Type, ValueContext};
