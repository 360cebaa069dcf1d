//! Block name resolution.
//!
//! The resolver trait is the boundary between the brush engine and the host's
//! block registry; `BlockTable` is the built-in implementation backed by a
//! name map, optionally loaded from a JSON index file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::entry::BlockEntry;
use crate::core::error::Error;
use crate::core::types::Result;

/// Capability for resolving a block name to a concrete entry.
pub trait BlockResolver {
    /// Resolve a block name, `None` if the name is unknown.
    fn resolve(&self, name: &str) -> Option<BlockEntry>;
}

/// Current version of the block table file format
pub const BLOCK_TABLE_VERSION: u32 = 1;

/// One named block in a table file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlockDef {
    name: String,
    id: u16,
    #[serde(default)]
    ext: u16,
}

/// On-disk block table index
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlockTableFile {
    version: u32,
    blocks: Vec<BlockDef>,
}

/// Name to entry lookup table. Names are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct BlockTable {
    by_name: HashMap<String, BlockEntry>,
}

impl BlockTable {
    /// Empty table.
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// Table with a small built-in vocabulary, used by tools and tests.
    /// Hosts with a real block registry supply their own resolver instead.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (name, id) in [
            ("air", 0),
            ("stone", 1),
            ("grass", 2),
            ("dirt", 3),
            ("cobblestone", 4),
            ("wood", 5),
            ("water", 8),
            ("lava", 10),
            ("sand", 12),
            ("gravel", 13),
            ("leaves", 18),
            ("glass", 20),
        ] {
            table.insert(name, BlockEntry::simple(id));
        }
        table
    }

    /// Register a name for an entry. A repeated name replaces the old entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: BlockEntry) {
        self.by_name.insert(name.into().to_ascii_lowercase(), entry);
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<BlockEntry> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Load a table from a JSON index file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let file: BlockTableFile = serde_json::from_str(&text)?;
        if file.version != BLOCK_TABLE_VERSION {
            return Err(Error::TableVersion(file.version));
        }
        let mut table = Self::new();
        for def in file.blocks {
            table.insert(def.name, BlockEntry::new(def.id, def.ext));
        }
        Ok(table)
    }
}

impl BlockResolver for BlockTable {
    fn resolve(&self, name: &str) -> Option<BlockEntry> {
        self.get(name)
    }
}
