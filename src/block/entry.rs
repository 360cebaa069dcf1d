//! Block entry data type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A placeable block variant - exactly 4 bytes
///
/// The primary code identifies the block type; the extended code carries
/// variant data interpreted by the host (custom block id, state, etc.).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Primary block type code
    pub id: u16,
    /// Extended type code
    pub ext: u16,
}

impl BlockEntry {
    /// Air entry - drawing it leaves empty space
    pub const AIR: BlockEntry = BlockEntry { id: 0, ext: 0 };

    /// Create an entry from both type codes
    pub fn new(id: u16, ext: u16) -> Self {
        Self { id, ext }
    }

    /// Create an entry with no extended data
    pub fn simple(id: u16) -> Self {
        Self { id, ext: 0 }
    }

    /// Check if this entry is air
    pub fn is_air(&self) -> bool {
        self.id == 0 && self.ext == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(std::mem::size_of::<BlockEntry>(), 4);
    }

    #[test]
    fn test_air() {
        assert!(BlockEntry::AIR.is_air());
        assert!(BlockEntry::default().is_air());
        assert!(!BlockEntry::simple(1).is_air());
        assert!(!BlockEntry::new(0, 7).is_air());
    }

    #[test]
    fn test_simple_has_no_ext() {
        let entry = BlockEntry::simple(42);
        assert_eq!(entry.id, 42);
        assert_eq!(entry.ext, 0);
    }
}
