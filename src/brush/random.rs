//! Weighted random brush.
//!
//! Picks a palette entry for each coordinate by hashing the coordinate
//! together with a per-instance seed. Selection is a pure function of
//! (coordinate, seed, palette), so repeated or out-of-order passes over the
//! same voxel always agree, and no mutable RNG state is carried between
//! calls.

use glam::IVec3;

use super::palette::expand_palette;
use super::{Brush, BrushArgs};
use crate::block::{BlockEntry, BlockResolver};
use crate::core::types::Result;

/// Hash state stays inside 31 bits
const HASH_MASK: i32 = 0x7fff_ffff;

/// Integer noise over the coordinate lattice.
///
/// All arithmetic is 32-bit two's-complement wrapping with the sign bit
/// masked off where written; intermediate products must wrap at 32 bits,
/// not widen. Output lands in [0, 0x7fffffff].
fn position_hash(pos: IVec3, seed: i32) -> i32 {
    let mut n = pos
        .x
        .wrapping_add(pos.y.wrapping_mul(1217))
        .wrapping_add(pos.z.wrapping_mul(4751))
        .wrapping_add(seed.wrapping_mul(673))
        & HASH_MASK;
    n = (n >> 13) ^ n;
    n.wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589)
        & HASH_MASK
}

/// Map a 31-bit hash onto a palette index in [0, len).
fn scale_index(raw: i32, len: usize) -> usize {
    let index = ((raw as f64 / HASH_MASK as f64) * len as f64) as usize;
    // raw == HASH_MASK would land one past the end without the clamp
    index.min(len - 1)
}

/// Brush that samples a weighted palette per coordinate.
#[derive(Debug)]
pub struct RandomBrush {
    palette: Vec<BlockEntry>,
    seed: i32,
}

impl RandomBrush {
    /// Create from an expanded palette and a 31-bit instance seed.
    ///
    /// The palette must be non-empty; seeds wider than 31 bits are masked.
    pub fn new(palette: Vec<BlockEntry>, seed: u32) -> Self {
        assert!(!palette.is_empty(), "random brush needs a non-empty palette");
        Self {
            palette,
            seed: (seed & HASH_MASK as u32) as i32,
        }
    }

    /// Build from drawing-command arguments.
    ///
    /// With no tokens the palette is the two-entry default [held, air].
    /// Otherwise each whitespace token is `block[/frequency]` and the
    /// palette comes from [`expand_palette`].
    pub fn from_args(args: &BrushArgs<'_>, resolver: &dyn BlockResolver) -> Result<Self> {
        let tokens: Vec<&str> = args.tokens().collect();
        if tokens.is_empty() {
            return Ok(Self::new(vec![args.held, BlockEntry::AIR], args.seed));
        }
        let palette = expand_palette(&tokens, resolver)?;
        Ok(Self::new(palette, args.seed))
    }

    /// The expanded palette this brush samples from.
    pub fn palette(&self) -> &[BlockEntry] {
        &self.palette
    }

    /// Palette index selected for a coordinate.
    pub fn index_for(&self, pos: IVec3) -> usize {
        scale_index(position_hash(pos, self.seed), self.palette.len())
    }
}

impl Brush for RandomBrush {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&self, pos: IVec3) -> BlockEntry {
        self.palette[self.index_for(pos)]
    }
}
