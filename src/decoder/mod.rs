pub mod common;
mod hash;
mod list;
pub mod module;
mod rdb;
mod sorted_set;
mod stream;
mod tap;

use std::io::Read;

pub use self::tap::CaptureReader;
use self::common::read_blob;
use crate::config::DumpConfig;
use crate::filter::{Filter, Simple};
use crate::module::ModuleRegistry;
use crate::payload;
use crate::sink::DumpSink;
use crate::types::{DumpKeyValue, RdbOk, RdbResult, Type, ValueContext};

/// Re-encodes values read from an RDB stream as DUMP payloads.
///
/// The caller positions `input` just after a value's type byte; the decoder
/// reads the key, walks the value while capturing its raw bytes and returns
/// the key with the assembled payload. Modules must be registered before the
/// decoder is built.
pub struct DumpDecoder<F: Filter = Simple> {
    config: DumpConfig,
    modules: ModuleRegistry,
    filter: F,
}

impl DumpDecoder<Simple> {
    pub fn new(config: DumpConfig, modules: ModuleRegistry) -> DumpDecoder<Simple> {
        DumpDecoder::with_filter(config, modules, Simple::new())
    }
}

impl<F: Filter> DumpDecoder<F> {
    pub fn with_filter(config: DumpConfig, modules: ModuleRegistry, filter: F) -> DumpDecoder<F> {
        DumpDecoder {
            config,
            modules,
            filter,
        }
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    /// Reads one key and its value of `value_type`.
    ///
    /// Returns `Ok(None)` when the filter rejects the value; its bytes are
    /// consumed all the same. Unknown type codes fail before anything is read.
    pub fn read_value<R: Read>(
        &self,
        input: &mut R,
        value_type: u8,
        context: &ValueContext,
    ) -> RdbResult<Option<DumpKeyValue>> {
        Type::from_encoding(value_type)?;

        let key = read_blob(input).map_err(|e| e.for_key(value_type))?;

        if !self.filter.matches_db(context.db)
            || !self.filter.matches_type(value_type)
            || !self.filter.matches_key(&key)
        {
            rdb::read_type(input, value_type, &self.modules)
                .map_err(|e| e.for_value(&key, value_type))?;
            log::debug!(
                "Skipped key {:?} (type {})",
                String::from_utf8_lossy(&key),
                value_type
            );
            return Ok(None);
        }

        let mut tap = CaptureReader::attach(input, value_type, self.config.capacity);
        let walked = rdb::read_type(&mut tap, value_type, &self.modules);
        let captured = tap.detach();
        walked.map_err(|e| e.for_value(&key, value_type))?;

        let version = self.config.dump_version(context.rdb_version);
        let value = payload::assemble(captured, version);
        log::debug!(
            "Dumped key {:?} (type {}, version {}, {} bytes)",
            String::from_utf8_lossy(&key),
            value_type,
            version,
            value.len()
        );

        Ok(Some(DumpKeyValue {
            key,
            value,
            value_type,
            db: context.db,
            expiry: context.expiry,
        }))
    }

    /// Like [`read_value`](Self::read_value), handing the record to `sink`.
    /// Returns whether a record was emitted.
    pub fn apply<R: Read, S: DumpSink>(
        &self,
        input: &mut R,
        value_type: u8,
        context: &ValueContext,
        sink: &mut S,
    ) -> RdbResult<bool> {
        match self.read_value(input, value_type, context)? {
            Some(record) => {
                sink.emit(record)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Walks one key and value without capturing anything.
    pub fn skip_value<R: Read>(&self, input: &mut R, value_type: u8) -> RdbOk {
        Type::from_encoding(value_type)?;
        let key = read_blob(input).map_err(|e| e.for_key(value_type))?;
        rdb::read_type(input, value_type, &self.modules).map_err(|e| e.for_value(&key, value_type))
    }
}
