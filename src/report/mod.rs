// Listing and diff reports over an address range
pub mod ranges;
pub mod reporter;

pub use ranges::{
    full_range, range_without_ra_table, DF_MAX, DF_MIN, RA_TABLE_END, RA_TABLE_START,
};
pub use reporter::{diff, print_listing, ReportError};
