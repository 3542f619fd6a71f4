//! Loader for the data flash description table
//!
//! The table is a `;`-delimited file with a header row followed by one row
//! per described address:
//!
//! ```text
//! address;format;description
//! 0x4080;S21;Device Name
//! 0x462A;I2;Design Capacity mAh
//! ```
//!
//! Format tags are stored verbatim here and validated by the decoder when
//! the field is actually read.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// One schema entry: the format tag and human description for an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub data_format: String,
    pub description: String,
}

impl FieldDescriptor {
    pub fn new(data_format: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            data_format: data_format.into(),
            description: description.into(),
        }
    }
}

/// Address-indexed table of field descriptors.
///
/// Not every address in the data flash region has an entry; reporting
/// skips addresses without one.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: BTreeMap<u16, FieldDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; a duplicate address replaces the earlier entry
    pub fn insert(&mut self, addr: u16, descriptor: FieldDescriptor) {
        self.entries.insert(addr, descriptor);
    }

    /// Look up the descriptor for an address
    pub fn get(&self, addr: u16) -> Option<&FieldDescriptor> {
        self.entries.get(&addr)
    }

    /// Number of described addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in ascending address order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &FieldDescriptor)> {
        self.entries.iter().map(|(&a, d)| (a, d))
    }
}

/// Parse an address column value: hexadecimal, `0x` prefix optional
fn parse_addr(field: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    let trimmed = field.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u16::from_str_radix(digits, 16)
}

/// Parse schema table text into a [`Schema`].
///
/// The first row is a header and is skipped unconditionally. Duplicate
/// addresses are allowed and the last row wins.
pub fn parse_schema(text: &str) -> Result<Schema> {
    let mut schema = Schema::new();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 3 {
            return Err(SchemaError::Parse {
                line: idx + 1,
                msg: format!("expected address;format;description, got {:?}", line),
            });
        }

        let addr = parse_addr(fields[0]).map_err(|e| SchemaError::Parse {
            line: idx + 1,
            msg: format!("invalid address {:?}: {}", fields[0], e),
        })?;

        schema.insert(addr, FieldDescriptor::new(fields[1], fields[2]));
    }

    Ok(schema)
}

/// Read a schema table file and parse it into a [`Schema`]
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema> {
    let text = fs::read_to_string(path)?;
    parse_schema(&text)
}
