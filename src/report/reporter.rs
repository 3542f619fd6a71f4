//! Report drivers: full listing of one dump, diff of two dumps
//!
//! Both walk an address range in ascending order, consult the schema for
//! each address, and decode only described fields. Addresses without a
//! schema entry are skipped silently.

use crate::decode::{decode_record, DecodeError};
use crate::memmap::ByteMap;
use crate::schema::Schema;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Write one decoded line per schema-described address in @range
pub fn print_listing<W: Write>(
    out: &mut W,
    range: impl Iterator<Item = u16>,
    schema: &Schema,
    dataset: &ByteMap,
) -> Result<()> {
    for addr in range {
        let descriptor = match schema.get(addr) {
            Some(d) => d,
            None => continue,
        };
        writeln!(out, "{}", decode_record(addr, descriptor, dataset)?)?;
    }
    Ok(())
}

/// Compare two dumps field by field and write every mismatch.
///
/// A mismatch is an exact inequality of the two rendered lines; each one
/// is written as a labelled pair followed by a blank separator line.
pub fn diff<W: Write>(
    out: &mut W,
    range: impl Iterator<Item = u16>,
    schema: &Schema,
    dataset_1: &ByteMap,
    dataset_2: &ByteMap,
) -> Result<()> {
    for addr in range {
        let descriptor = match schema.get(addr) {
            Some(d) => d,
            None => continue,
        };

        let line_1 = decode_record(addr, descriptor, dataset_1)?;
        let line_2 = decode_record(addr, descriptor, dataset_2)?;

        if line_1 != line_2 {
            writeln!(out, "dataset 1: {}", line_1)?;
            writeln!(out, "dataset 2: {}", line_2)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{full_range, range_without_ra_table, RA_TABLE_START};
    use crate::schema::FieldDescriptor;

    fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_listing_one_line_per_described_address() {
        let mut schema = Schema::new();
        schema.insert(0x4000, FieldDescriptor::new("U1", "first"));
        schema.insert(0x4002, FieldDescriptor::new("U1", "second"));

        let dataset: ByteMap = [(0x4000, 7), (0x4001, 99), (0x4002, 8)].into_iter().collect();

        let output = render(|out| {
            print_listing(out, full_range(), &schema, &dataset).unwrap();
        });

        assert_eq!(
            output,
            "0x4000: (U1) [first] = 7\n0x4002: (U1) [second] = 8\n"
        );
    }

    #[test]
    fn test_listing_empty_schema_emits_nothing() {
        let dataset: ByteMap = [(0x4000, 1)].into_iter().collect();
        let output = render(|out| {
            print_listing(out, full_range(), &Schema::new(), &dataset).unwrap();
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_listing_missing_byte_is_fatal() {
        let mut schema = Schema::new();
        schema.insert(0x4000, FieldDescriptor::new("U2", "wide"));
        let dataset: ByteMap = [(0x4000, 1)].into_iter().collect();

        let mut out = Vec::new();
        let err = print_listing(&mut out, full_range(), &schema, &dataset).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Decode(DecodeError::MissingAddress(0x4001))
        ));
    }

    #[test]
    fn test_diff_emits_labelled_pair_and_separator() {
        let mut schema = Schema::new();
        schema.insert(0x4000, FieldDescriptor::new("U1", "value"));

        let dataset_1: ByteMap = [(0x4000, 0x01)].into_iter().collect();
        let dataset_2: ByteMap = [(0x4000, 0x02)].into_iter().collect();

        let output = render(|out| {
            diff(out, full_range(), &schema, &dataset_1, &dataset_2).unwrap();
        });

        assert_eq!(
            output,
            "dataset 1: 0x4000: (U1) [value] = 1\n\
             dataset 2: 0x4000: (U1) [value] = 2\n\n"
        );
    }

    #[test]
    fn test_diff_silent_on_equal_values() {
        let mut schema = Schema::new();
        schema.insert(0x4000, FieldDescriptor::new("U1", "value"));

        let dataset: ByteMap = [(0x4000, 0x55)].into_iter().collect();
        let output = render(|out| {
            diff(out, full_range(), &schema, &dataset, &dataset.clone()).unwrap();
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_skips_undescribed_addresses() {
        // Bytes differ at 0x4001, but no schema entry covers it
        let mut schema = Schema::new();
        schema.insert(0x4000, FieldDescriptor::new("U1", "value"));

        let dataset_1: ByteMap = [(0x4000, 1), (0x4001, 10)].into_iter().collect();
        let dataset_2: ByteMap = [(0x4000, 1), (0x4001, 20)].into_iter().collect();

        let output = render(|out| {
            diff(out, full_range(), &schema, &dataset_1, &dataset_2).unwrap();
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_excludes_ra_table_with_filtered_range() {
        let mut schema = Schema::new();
        schema.insert(RA_TABLE_START, FieldDescriptor::new("H2", "Ra row"));

        let dataset_1: ByteMap = [(RA_TABLE_START, 0x11), (RA_TABLE_START + 1, 0x22)]
            .into_iter()
            .collect();
        let dataset_2: ByteMap = [(RA_TABLE_START, 0x33), (RA_TABLE_START + 1, 0x44)]
            .into_iter()
            .collect();

        let output = render(|out| {
            diff(
                out,
                range_without_ra_table(),
                &schema,
                &dataset_1,
                &dataset_2,
            )
            .unwrap();
        });
        assert!(output.is_empty());

        // The same mismatch is reported when the full range is used
        let output = render(|out| {
            diff(out, full_range(), &schema, &dataset_1, &dataset_2).unwrap();
        });
        assert!(output.contains("dataset 1: "));
    }
}
