//! Module types: packed identifiers and the registry of module decoders.
//!
//! A module value starts with a 64-bit id holding a 9 symbol name (6 bits per
//! symbol, most significant first, starting at bit 10) and a 10-bit version.
//! Only a registered [`ModuleDecoder`] knows how far a module value extends.

use indexmap::IndexMap;
use std::fmt;
use std::io::Read;

use crate::constants::module::{MODULE_SET, NAME_LENGTH, VERSION_BITS, VERSION_MASK};
use crate::types::{RdbError, RdbOk, RdbResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub name: String,
    pub version: u32,
}

impl ModuleId {
    pub fn new(name: &str, version: u32) -> ModuleId {
        ModuleId {
            name: name.to_owned(),
            version,
        }
    }

    pub fn decode(module_id: u64) -> ModuleId {
        let name = (0..NAME_LENGTH)
            .map(|i| {
                let shift = VERSION_BITS as usize + (NAME_LENGTH - 1 - i) * 6;
                MODULE_SET[((module_id >> shift) & 63) as usize] as char
            })
            .collect();

        ModuleId {
            name,
            version: (module_id & VERSION_MASK) as u32,
        }
    }

    pub fn encode(&self) -> RdbResult<u64> {
        if self.name.len() != NAME_LENGTH {
            return Err(RdbError::InvalidModuleName(self.name.clone()));
        }
        if self.version as u64 > VERSION_MASK {
            return Err(RdbError::InvalidModuleVersion(self.version));
        }

        let mut module_id = 0u64;
        for symbol in self.name.bytes() {
            let index = MODULE_SET
                .iter()
                .position(|&c| c == symbol)
                .ok_or_else(|| RdbError::InvalidModuleName(self.name.clone()))?;
            module_id = (module_id << 6) | index as u64;
        }

        Ok((module_id << VERSION_BITS) | self.version as u64)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Walks the serialized form of one module type.
///
/// `skip` must consume exactly the bytes the module wrote for one value and
/// nothing more: for MODULE_2 values the module EOF marker that follows is
/// checked by the caller. `when` is 1 for MODULE and 2 for MODULE_2 values.
pub trait ModuleDecoder {
    fn skip(&self, input: &mut dyn Read, when: u8) -> RdbOk;
}

impl<F> ModuleDecoder for F
where
    F: Fn(&mut dyn Read, u8) -> RdbOk,
{
    fn skip(&self, input: &mut dyn Read, when: u8) -> RdbOk {
        self(input, when)
    }
}

/// Decoders keyed by exact module name and version.
#[derive(Default)]
pub struct ModuleRegistry {
    decoders: IndexMap<ModuleId, Box<dyn ModuleDecoder>>,
}

impl ModuleRegistry {
    pub fn new() -> ModuleRegistry {
        ModuleRegistry::default()
    }

    pub fn register<D>(&mut self, name: &str, version: u32, decoder: D)
    where
        D: ModuleDecoder + 'static,
    {
        let id = ModuleId::new(name, version);
        if self.decoders.contains_key(&id) {
            log::warn!("Replacing module decoder for {}", id);
        }
        self.decoders.insert(id, Box::new(decoder));
    }

    pub fn lookup(&self, id: &ModuleId) -> Option<&dyn ModuleDecoder> {
        self.decoders.get(id).map(|decoder| &**decoder)
    }

    /// Registered modules, in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleId> {
        self.decoders.keys()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.decoders.keys()).finish()
    }
}
