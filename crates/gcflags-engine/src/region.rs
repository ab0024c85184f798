//! Region size bounds
//!
//! The region sizing subsystem proper lives with the heap. This module only
//! carries the bounds the flag constraints and ergonomics read.

use crate::defaults::{M, MAX_REGION_SIZE, MIN_REGION_SIZE, TARGET_REGION_NUMBER};

/// Minimum and maximum region size plus the ergonomic region count target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    min_size: u64,
    max_size: u64,
    target_number: u64,
}

impl RegionBounds {
    /// Create bounds from explicit values.
    pub const fn new(min_size: u64, max_size: u64, target_number: u64) -> Self {
        Self {
            min_size,
            max_size,
            target_number,
        }
    }

    /// Smallest permitted region size in bytes.
    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Largest permitted region size in bytes.
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Region size derived from the maximum heap size.
    ///
    /// Divides the heap into roughly `target_number` regions, rounds down to
    /// a power of two and clamps the result to `[min_size, max_size]`.
    pub fn ergonomic_region_size(&self, max_heap_size: u64) -> u64 {
        let size = (max_heap_size / self.target_number.max(1)).max(self.min_size);
        let size = 1u64 << size.max(1).ilog2();
        size.clamp(self.min_size, self.max_size)
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self::new(MIN_REGION_SIZE, MAX_REGION_SIZE, TARGET_REGION_NUMBER)
    }
}

/// Log2 of a region size expressed in MB, floored at zero.
pub fn region_size_log_mb(region_size: u64) -> u32 {
    (region_size / M).max(1).ilog2()
}

/// Maximum heap alignment the collector may require.
///
/// Heap reservation aligns to the largest region size so any ergonomic or
/// explicit region size divides the reserved range.
pub fn max_heap_alignment(bounds: &RegionBounds) -> u64 {
    bounds.max_size()
}
