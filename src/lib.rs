// DFDUMP-RS: BQ28Z610 data flash dump decoder and comparator
// Copyright 2024 - Licensed under MIT

pub mod decode;
pub mod memmap;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use decode::{decode_record, decode_value, DataFormat, DecodeError};
pub use memmap::{load_dump, parse_dump, ByteMap, DumpError};
pub use report::{
    diff, full_range, print_listing, range_without_ra_table, ReportError, DF_MAX, DF_MIN,
    RA_TABLE_END, RA_TABLE_START,
};
pub use schema::{load_schema, parse_schema, FieldDescriptor, Schema, SchemaError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
