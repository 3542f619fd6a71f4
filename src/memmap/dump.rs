//! Loader for text-format data flash dumps
//!
//! A dump is one line per address block:
//!
//! ```text
//! 0x4000: [ 08 00 05 00 32 01 3C 00 ]
//! 0x4008: [ 10 0E 9D 86 ]
//! ```
//!
//! Each byte after the first lands on the next consecutive address, so a
//! single line can cover a whole block. Overlapping lines are legal and
//! last-write-wins.

use super::byte_map::ByteMap;
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{multispace0, multispace1},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::{delimited, preceded, terminated},
    IResult, Parser,
};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dump parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, DumpError>;

/// Parse a `0x`-prefixed hexadecimal address
fn hex_addr(input: &str) -> IResult<&str, u16> {
    map_res(
        preceded(tag("0x"), take_while1(|c: char| c.is_ascii_hexdigit())),
        |s: &str| u16::from_str_radix(s, 16),
    )
    .parse(input)
}

/// Parse a bare hexadecimal byte value
fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(take_while1(|c: char| c.is_ascii_hexdigit()), |s: &str| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

/// Parse one dump line: `0xAAAA: [ B0 B1 ... ]`
fn dump_line(input: &str) -> IResult<&str, (u16, Vec<u8>)> {
    let (input, addr) = terminated(hex_addr, tag(":")).parse(input)?;
    let (input, values) = preceded(
        multispace1,
        delimited(
            tag("["),
            delimited(
                multispace0,
                separated_list1(multispace1, hex_byte),
                multispace0,
            ),
            tag("]"),
        ),
    )
    .parse(input)?;
    Ok((input, (addr, values)))
}

/// Parse dump text into a [`ByteMap`].
///
/// Lines are processed independently in file order; a malformed line is a
/// fatal error reported with its 1-based line number.
pub fn parse_dump(text: &str) -> Result<ByteMap> {
    let mut map = ByteMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let (_, (addr, values)) =
            all_consuming(dump_line)
                .parse(line)
                .map_err(|e| DumpError::Parse {
                    line: idx + 1,
                    msg: e.to_string(),
                })?;

        let mut cursor = addr;
        for value in values {
            map.insert(cursor, value);
            cursor = cursor.wrapping_add(1);
        }
    }

    Ok(map)
}

/// Read a dump file and parse it into a [`ByteMap`]
pub fn load_dump(path: impl AsRef<Path>) -> Result<ByteMap> {
    let text = fs::read_to_string(path)?;
    parse_dump(&text)
}
