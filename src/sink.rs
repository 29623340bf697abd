use crate::types::{DumpKeyValue, RdbOk};

/// Receives every record the decoder emits.
pub trait DumpSink {
    fn emit(&mut self, record: DumpKeyValue) -> RdbOk;
}

impl DumpSink for Vec<DumpKeyValue> {
    fn emit(&mut self, record: DumpKeyValue) -> RdbOk {
        self.push(record);
        Ok(())
    }
}
