//! Decode dump bytes into display strings
//!
//! The core read path: given an address, a field descriptor and a dump's
//! byte map, pull the field's bytes out of the map, decode them per the
//! format tag, and render one report line:
//!
//! ```text
//! 0x4240: (U2) [Cycle Count] = 18
//! ```

use super::format::DataFormat;
use crate::memmap::ByteMap;
use crate::schema::FieldDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unknown data format tag: {0:?}")]
    UnknownFormat(String),

    #[error("Dump has no byte at address 0x{0:04X}")]
    MissingAddress(u16),

    #[error("String at 0x{addr:04X} declares length {len}, but capacity is {cap} bytes")]
    CorruptString { addr: u16, len: usize, cap: usize },

    #[error("String at 0x{addr:04X} contains invalid text bytes")]
    Text { addr: u16 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Read @width consecutive bytes ascending from @addr.
/// Any missing address is fatal: the dump does not fully cover the field.
fn read_buffer(addr: u16, width: usize, dataset: &ByteMap) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(width);
    for i in 0..width {
        let a = addr
            .checked_add(i as u16)
            .ok_or(DecodeError::MissingAddress(addr))?;
        buf.push(dataset.get(a).ok_or(DecodeError::MissingAddress(a))?);
    }
    Ok(buf)
}

/// Decode the value at @addr per @format and render it as display text.
///
/// Numeric formats render as plain decimal/float text; `H1`/`H2` render in
/// both hex and binary notation; `S{n}` yields the decoded string.
pub fn decode_value(addr: u16, format: DataFormat, dataset: &ByteMap) -> Result<String> {
    let buf = read_buffer(addr, format.width(), dataset)?;

    let rendered = match format {
        DataFormat::U1 => buf[0].to_string(),
        DataFormat::U2 => u16::from_le_bytes([buf[0], buf[1]]).to_string(),
        DataFormat::U4 => u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]).to_string(),
        DataFormat::I1 => (buf[0] as i8).to_string(),
        DataFormat::I2 => i16::from_le_bytes([buf[0], buf[1]]).to_string(),
        DataFormat::I4 => i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]).to_string(),
        DataFormat::F4 => f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]).to_string(),
        DataFormat::H1 => format!("0x{:02X} = 0b{:08b}", buf[0], buf[0]),
        DataFormat::H2 => {
            let value = u16::from_le_bytes([buf[0], buf[1]]);
            format!("0x{:04X} = 0b{:016b}", value, value)
        }
        DataFormat::Str(capacity) => {
            // First byte is the actual string length; the rest of the
            // declared buffer beyond it is ignored.
            let len = buf[0] as usize;
            if len > capacity - 1 {
                return Err(DecodeError::CorruptString {
                    addr,
                    len,
                    cap: capacity - 1,
                });
            }
            std::str::from_utf8(&buf[1..=len])
                .map_err(|_| DecodeError::Text { addr })?
                .to_string()
        }
    };

    Ok(rendered)
}

/// Decode one schema-described field and compose the full report line.
/// The descriptor's format tag is validated here, not at schema load time.
pub fn decode_record(addr: u16, descriptor: &FieldDescriptor, dataset: &ByteMap) -> Result<String> {
    let format: DataFormat = descriptor.data_format.parse()?;
    let value = decode_value(addr, format, dataset)?;
    Ok(format!(
        "0x{:04X}: ({}) [{}] = {}",
        addr, format, descriptor.description, value
    ))
}
