use super::common::utils::{read_length, skip_binary_double, skip_binary_float, skip_blob};
use crate::constants::module;
use crate::module::{ModuleId, ModuleRegistry};
use crate::types::{RdbError, RdbOk};
use std::io::Read;

/// Walks a MODULE (`when == 1`) or MODULE_2 (`when == 2`) value.
pub fn skip_module<R: Read>(input: &mut R, modules: &ModuleRegistry, when: u8) -> RdbOk {
    let id = ModuleId::decode(read_length(input)?);
    log::trace!("Module value {} (when {})", id, when);

    match modules.lookup(&id) {
        Some(decoder) => {
            decoder.skip(input, when)?;
            if when == 2 {
                let eof = read_length(input)?;
                if eof != module::OPCODE_EOF {
                    return Err(RdbError::MalformedModuleTrailer {
                        name: id.name,
                        version: id.version,
                        found: eof,
                    });
                }
            }
            Ok(())
        }
        None if when == 2 => {
            log::warn!("No decoder for module {}, walking its opcodes", id);
            skip_module_value(input)
        }
        None => Err(RdbError::UnregisteredModule {
            name: id.name,
            version: id.version,
        }),
    }
}

/// Walks a MODULE_2 body by its opcodes, up to and including the EOF opcode.
pub fn skip_module_value<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    loop {
        match read_length(input)? {
            module::OPCODE_EOF => return Ok(()),
            module::OPCODE_SINT | module::OPCODE_UINT => {
                read_length(input)?;
            }
            module::OPCODE_STRING => skip_blob(input)?,
            module::OPCODE_FLOAT => skip_binary_float(input)?,
            module::OPCODE_DOUBLE => skip_binary_double(input)?,
            opcode => {
                return Err(RdbError::ParsingError {
                    context: "skip_module_value",
                    message: format!("Unknown module opcode: {}", opcode),
                })
            }
        }
    }
}
