// Typed decoding of data flash fields
pub mod format;
pub mod record;

pub use format::DataFormat;
pub use record::{decode_record, decode_value, DecodeError};
