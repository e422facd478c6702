//! Byte membership table for the deletion set.

use std::fmt;

/// The set of byte values to remove from the target.
///
/// Built from raw bytes; order and duplicates in the source are irrelevant.
///
/// ```
/// use charstrip::strip::DeletionSet;
///
/// let set = DeletionSet::from_bytes(b"aab");
/// assert!(set.contains(b'a'));
/// assert!(!set.contains(b'c'));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DeletionSet {
    members: [bool; 256],
    len: usize,
}

impl DeletionSet {
    /// Create an empty set, which passes every byte through.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            members: [false; 256],
            len: 0,
        }
    }

    /// Build a set from every byte of `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::empty();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    /// Add a byte to the set.
    pub fn insert(&mut self, byte: u8) {
        let slot = &mut self.members[usize::from(byte)];
        if !*slot {
            *slot = true;
            self.len += 1;
        }
    }

    /// Check whether `byte` is to be deleted.
    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        self.members[byte as usize]
    }

    /// Number of distinct bytes in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when nothing will be deleted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl Default for DeletionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for DeletionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| std::ascii::escape_default(b).to_string()))
            .finish()
    }
}
