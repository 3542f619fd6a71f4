// Byte-addressed storage for data flash dump contents
pub mod byte_map;
pub mod dump;

pub use byte_map::ByteMap;
pub use dump::{load_dump, parse_dump, DumpError};
