//! Draw operations - traversals that apply a brush across a target region.

use glam::IVec3;
use log::debug;

use crate::block::BlockEntry;
use crate::brush::Brush;

/// Axis-aligned cuboid draw operation with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuboidOp {
    min: IVec3,
    max: IVec3,
}

impl CuboidOp {
    /// Create from two opposite corners, in any order.
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lowest corner (inclusive).
    pub fn min(&self) -> IVec3 {
        self.min
    }

    /// Highest corner (inclusive).
    pub fn max(&self) -> IVec3 {
        self.max
    }

    /// Number of voxels the operation touches.
    pub fn volume(&self) -> u64 {
        let extent = (self.max - self.min) + IVec3::ONE;
        extent.x as u64 * extent.y as u64 * extent.z as u64
    }

    /// Query the brush once per voxel and hand each placement to `place`.
    ///
    /// The traversal order is an implementation detail; brushes must give
    /// order-independent answers.
    pub fn perform(&self, brush: &dyn Brush, mut place: impl FnMut(IVec3, BlockEntry)) {
        debug!("{} brush over {} voxels", brush.name(), self.volume());
        for y in self.min.y..=self.max.y {
            for z in self.min.z..=self.max.z {
                for x in self.min.x..=self.max.x {
                    let pos = IVec3::new(x, y, z);
                    place(pos, brush.select(pos));
                }
            }
        }
    }
}
