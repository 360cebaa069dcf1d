//! Weighted palette expansion.
//!
//! Draw weights are implemented by replication: a `block/frequency` token
//! contributes `frequency` adjacent copies of the block to a flat palette,
//! and the selector then picks uniformly over palette indices.

use crate::block::{BlockEntry, BlockResolver};
use crate::core::error::Error;
use crate::core::types::Result;

/// Upper bound for an explicit token frequency
pub const MAX_FREQUENCY: u32 = 10_000;

/// One parsed `block[/frequency]` token.
struct WeightSpec {
    entry: BlockEntry,
    count: u32,
}

fn parse_token(token: &str, resolver: &dyn BlockResolver) -> Result<WeightSpec> {
    let (name, frequency) = match token.split_once('/') {
        Some((name, frequency)) => (name, Some(frequency)),
        None => (token, None),
    };
    let entry = resolver
        .resolve(name)
        .ok_or_else(|| Error::UnknownBlock(name.to_string()))?;
    let count = match frequency {
        None => 1,
        Some(text) => match text.parse::<u32>() {
            Ok(n) if (1..=MAX_FREQUENCY).contains(&n) => n,
            _ => return Err(Error::Frequency(text.to_string())),
        },
    };
    Ok(WeightSpec { entry, count })
}

/// Expand `block[/frequency]` tokens into a flat palette.
///
/// Blocks appear in token order, each replicated `frequency` times
/// (default 1). A palette built from exactly one token gets a single air
/// entry appended, so a one-block brush sprays instead of filling solid.
/// The air rule keys on token count, not net weight: `stone/5` alone still
/// gets air, `stone/5 stone` does not.
///
/// Any resolution or frequency failure aborts the whole expansion; no
/// partial palette is returned.
pub fn expand_palette(
    tokens: &[&str],
    resolver: &dyn BlockResolver,
) -> Result<Vec<BlockEntry>> {
    let specs = tokens
        .iter()
        .map(|token| parse_token(token, resolver))
        .collect::<Result<Vec<_>>>()?;

    let total: usize = specs.iter().map(|spec| spec.count as usize).sum();
    let mut palette = Vec::with_capacity(total + 1);
    for spec in &specs {
        for _ in 0..spec.count {
            palette.push(spec.entry);
        }
    }
    if specs.len() == 1 {
        palette.push(BlockEntry::AIR);
    }
    Ok(palette)
}
