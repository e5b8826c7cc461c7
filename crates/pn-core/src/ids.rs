use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used for per-namespace sequence numbers.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeSeq = Id;
pub type LinkSeq = Id;

/// Monotonic counter handing out sequence IDs for one namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqCounter {
    next: u32,
}

impl SeqCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next ID. IDs are never reused.
    pub fn next_id(&mut self) -> Id {
        let id = Id::from_index(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs issued so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}
