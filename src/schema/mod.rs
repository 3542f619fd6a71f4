// Data flash description table (address -> field descriptor)
pub mod table;

pub use table::{load_schema, parse_schema, FieldDescriptor, Schema, SchemaError};
