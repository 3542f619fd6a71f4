// Sparse address -> byte mapping built from a dump file

use std::collections::BTreeMap;
use std::fmt;

/// Byte-addressed view of one data flash dump.
///
/// Keys are physical data flash addresses and need not be contiguous;
/// every address a decoded field touches must be present, which the
/// decoder checks at read time. Built once by the dump loader and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteMap {
    data: BTreeMap<u16, u8>,
}

impl ByteMap {
    /// Create a new empty byte map
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a byte at an address, overwriting any earlier value
    pub fn insert(&mut self, addr: u16, value: u8) {
        self.data.insert(addr, value);
    }

    /// Get the byte at an address, if the dump covered it
    pub fn get(&self, addr: u16) -> Option<u8> {
        self.data.get(&addr).copied()
    }

    /// Number of addresses covered by the dump
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the map holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check that @len consecutive addresses starting at @addr are all present
    pub fn covers(&self, addr: u16, len: usize) -> bool {
        (0..len).all(|i| {
            addr.checked_add(i as u16)
                .map(|a| self.data.contains_key(&a))
                .unwrap_or(false)
        })
    }

    /// Iterate over (address, byte) pairs in ascending address order
    pub fn iter(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.data.iter().map(|(&a, &v)| (a, v))
    }
}

impl FromIterator<(u16, u8)> for ByteMap {
    fn from_iter<T: IntoIterator<Item = (u16, u8)>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ByteMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteMap({} bytes)", self.data.len())
    }
}
