//! Filter trait and implementations to skip values in the decoder

use regex::Regex;

use crate::types::Type;

/// A trait to decide which databases, types or keys are dumped
pub trait Filter {
    fn matches_db(&self, _db: u32) -> bool {
        true
    }
    fn matches_type(&self, _enc_type: u8) -> bool {
        true
    }
    fn matches_key(&self, _key: &[u8]) -> bool {
        true
    }
}

/// A filter to match by database, type or a regular expression against key names
#[derive(Debug, Default)]
pub struct Simple {
    databases: Vec<u32>,
    types: Vec<Type>,
    keys: Option<Regex>,
}

impl Simple {
    pub fn new() -> Simple {
        Simple::default()
    }

    pub fn add_database(&mut self, db: u32) {
        self.databases.push(db);
    }

    pub fn add_type(&mut self, typ: Type) {
        self.types.push(typ);
    }

    pub fn add_keys(&mut self, re: Regex) {
        self.keys = Some(re);
    }
}

impl Filter for Simple {
    fn matches_db(&self, db: u32) -> bool {
        self.databases.is_empty() || self.databases.contains(&db)
    }

    fn matches_type(&self, enc_type: u8) -> bool {
        if self.types.is_empty() {
            return true;
        }

        match Type::from_encoding(enc_type) {
            Ok(typ) => self.types.contains(&typ),
            Err(_) => false,
        }
    }

    fn matches_key(&self, key: &[u8]) -> bool {
        match self.keys {
            None => true,
            Some(ref re) => re.is_match(&String::from_utf8_lossy(key)),
        }
    }
}
