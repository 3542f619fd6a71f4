// Data flash address region boundaries and iteration helpers

/// First data flash address
pub const DF_MIN: u16 = 0x4000;
/// Last data flash address (inclusive)
pub const DF_MAX: u16 = 0x5FFF;

/// First address of the Ra table rows.
/// The Ra tables hold cell impedance calibration data that the gauge
/// rewrites continuously, so byte-for-byte comparison of this region is
/// meaningless.
pub const RA_TABLE_START: u16 = 0x4102;
/// Last address of the Ra table rows (inclusive)
pub const RA_TABLE_END: u16 = 0x41DE;

/// Every data flash address in ascending order
pub fn full_range() -> impl Iterator<Item = u16> {
    DF_MIN..=DF_MAX
}

/// The data flash region with the Ra table rows skipped, for diffing
pub fn range_without_ra_table() -> impl Iterator<Item = u16> {
    (DF_MIN..RA_TABLE_START).chain((RA_TABLE_END + 1)..=DF_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range_bounds() {
        let addrs: Vec<u16> = full_range().collect();
        assert_eq!(addrs.len(), 0x2000);
        assert_eq!(addrs.first(), Some(&DF_MIN));
        assert_eq!(addrs.last(), Some(&DF_MAX));
    }

    #[test]
    fn test_range_without_ra_table_skips_exactly_the_table() {
        let addrs: Vec<u16> = range_without_ra_table().collect();
        let excluded = (RA_TABLE_END - RA_TABLE_START + 1) as usize;
        assert_eq!(addrs.len(), 0x2000 - excluded);

        assert!(addrs.contains(&(RA_TABLE_START - 1)));
        assert!(!addrs.contains(&RA_TABLE_START));
        assert!(!addrs.contains(&RA_TABLE_END));
        assert!(addrs.contains(&(RA_TABLE_END + 1)));
    }

    #[test]
    fn test_range_without_ra_table_ascending() {
        let addrs: Vec<u16> = range_without_ra_table().collect();
        assert!(addrs.windows(2).all(|w| w[0] < w[1]));
    }
}
