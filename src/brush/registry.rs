//! Brush name lookup and construction.

use super::{Brush, BrushArgs, RandomBrush, SolidBrush};
use crate::block::BlockResolver;
use crate::core::error::Error;
use crate::core::types::Result;

/// Constructor for one brush kind.
pub type BrushFactory = fn(&BrushArgs<'_>, &dyn BlockResolver) -> Result<Box<dyn Brush>>;

/// Registry entry: name, help lines, constructor.
pub struct BrushDesc {
    pub name: &'static str,
    pub help: &'static [&'static str],
    pub factory: BrushFactory,
}

/// Lookup table from brush name to constructor.
pub struct BrushRegistry {
    entries: Vec<BrushDesc>,
}

impl BrushRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry with the built-in brushes.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(BrushDesc {
            name: "solid",
            help: &[
                "Arguments: [block]",
                "Draws every voxel with [block], or the held block if omitted.",
            ],
            factory: |args, resolver| Ok(Box::new(SolidBrush::from_args(args, resolver)?)),
        });
        registry.register(BrushDesc {
            name: "random",
            help: &[
                "Arguments: [block1/frequency] [block2]..",
                "Randomly picks one of the given blocks for each voxel.",
                "frequency is optional (defaults to 1) and weights the block \
                 relative to the total of all frequencies.",
            ],
            factory: |args, resolver| Ok(Box::new(RandomBrush::from_args(args, resolver)?)),
        });
        registry
    }

    /// Add a brush kind. A repeated name shadows nothing; first match wins.
    pub fn register(&mut self, desc: BrushDesc) {
        self.entries.push(desc);
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&BrushDesc> {
        self.entries
            .iter()
            .find(|desc| desc.name.eq_ignore_ascii_case(name))
    }

    /// Construct the named brush from drawing-command arguments.
    pub fn make(
        &self,
        name: &str,
        args: &BrushArgs<'_>,
        resolver: &dyn BlockResolver,
    ) -> Result<Box<dyn Brush>> {
        let desc = self
            .find(name)
            .ok_or_else(|| Error::UnknownBrush(name.to_string()))?;
        (desc.factory)(args, resolver)
    }

    /// Registered brush names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|desc| desc.name)
    }
}

impl Default for BrushRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
