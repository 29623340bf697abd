use crate::constants::constant::DEFAULT_CAPACITY;

/// Settings for a [`DumpDecoder`](crate::DumpDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpConfig {
    /// Version written into every payload. `None` keeps the RDB version each
    /// value was read at. Redis 2.8 uses 6, 3.x 7, 4.0 8.
    pub version: Option<u8>,
    /// Initial size of the capture buffer.
    pub capacity: usize,
}

impl Default for DumpConfig {
    fn default() -> DumpConfig {
        DumpConfig {
            version: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DumpConfig {
    pub fn new() -> DumpConfig {
        DumpConfig::default()
    }

    pub fn with_version(mut self, version: u8) -> DumpConfig {
        self.version = Some(version);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> DumpConfig {
        self.capacity = capacity;
        self
    }

    /// Version byte for a value read at `rdb_version`.
    pub fn dump_version(&self, rdb_version: u8) -> u8 {
        self.version.unwrap_or(rdb_version)
    }
}
