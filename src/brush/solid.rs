//! Solid single-block brush.

use glam::IVec3;

use super::{Brush, BrushArgs};
use crate::block::{BlockEntry, BlockResolver};
use crate::core::error::Error;
use crate::core::types::Result;

/// Brush that places the same block at every coordinate.
#[derive(Debug)]
pub struct SolidBrush {
    block: BlockEntry,
}

impl SolidBrush {
    /// Create a solid brush for one block.
    pub fn new(block: BlockEntry) -> Self {
        Self { block }
    }

    /// Build from drawing-command arguments.
    ///
    /// No tokens draws with the held block; otherwise the first token names
    /// the block to draw with.
    pub fn from_args(args: &BrushArgs<'_>, resolver: &dyn BlockResolver) -> Result<Self> {
        let block = match args.tokens().next() {
            None => args.held,
            Some(name) => resolver
                .resolve(name)
                .ok_or_else(|| Error::UnknownBlock(name.to_string()))?,
        };
        Ok(Self::new(block))
    }
}

impl Brush for SolidBrush {
    fn name(&self) -> &'static str {
        "solid"
    }

    fn select(&self, _pos: IVec3) -> BlockEntry {
        self.block
    }
}
