//! Default constants for flag values and region sizing.
//!
//! Centralizes the numbers shared by the descriptor table, the region
//! bounds, ergonomics and the constraint validators.

/// One kibibyte.
pub const K: u64 = 1024;

/// One mebibyte.
pub const M: u64 = 1024 * K;

/// One gibibyte.
pub const G: u64 = 1024 * M;

/// One tebibyte.
pub const T: u64 = 1024 * G;

/// Largest value representable by a 32-bit unsigned integer.
pub const MAX_JUINT: u64 = u32::MAX as u64;

/// Upper bound for `NewSize` on 64-bit address widths.
///
/// The young generation length is stored as `NewSize / region size` in a
/// 32-bit unsigned integer. With regions of at least 1 MB, any value up to
/// `MAX_JUINT * M` fits.
pub const MAX_NEW_SIZE_64: u64 = MAX_JUINT * M;

/// Smallest heap region size (1 MB).
pub const MIN_REGION_SIZE: u64 = M;

/// Largest heap region size (32 MB).
pub const MAX_REGION_SIZE: u64 = 32 * M;

/// Number of regions ergonomics aims for when sizing regions.
pub const TARGET_REGION_NUMBER: u64 = 2048;

/// Coarse remembered-set entries per region, per log2 of the region size in MB.
pub const REGION_ENTRIES_BASE: i64 = 256;

/// Sparse remembered-set entries per region, per log2 of the region size in MB.
pub const SPARSE_REGION_ENTRIES_BASE: i64 = 4;

/// Default young generation minimum, in percent of the heap.
pub const DEFAULT_NEW_SIZE_PERCENT: u64 = 5;

/// Default young generation maximum, in percent of the heap.
pub const DEFAULT_MAX_NEW_SIZE_PERCENT: u64 = 60;

/// Default pause time goal in milliseconds.
pub const DEFAULT_MAX_PAUSE_MILLIS: u64 = 200;

/// Default initial young generation size in bytes.
pub const DEFAULT_NEW_SIZE: u64 = M;

/// Default maximum heap size in bytes.
pub const DEFAULT_MAX_HEAP_SIZE: u64 = 96 * M;
