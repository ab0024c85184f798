//! Ergonomic derivation of sentinel defaults
//!
//! Runs after argument parsing and before the after-ergo constraint phase.
//! Only flags still at their compiled-in default are touched, and derived
//! values are recorded with [`FlagOrigin::Ergonomic`].

use crate::context::FlagContext;
use crate::defaults::{REGION_ENTRIES_BASE, SPARSE_REGION_ENTRIES_BASE};
use crate::error::FlagResult;
use crate::flags::{FlagKey, FlagOrigin, FlagValue};
use crate::region::region_size_log_mb;

/// Fill in derived values. Returns the flags that were changed, in order.
pub fn apply(ctx: &mut FlagContext) -> FlagResult<Vec<(FlagKey, FlagValue)>> {
    let mut changed = Vec::new();
    if !ctx.use_region_gc() {
        return Ok(changed);
    }

    if ctx.is_default(FlagKey::HeapRegionSize) {
        let size = ctx
            .region_bounds()
            .ergonomic_region_size(ctx.max_heap_size());
        set(ctx, &mut changed, FlagKey::HeapRegionSize, FlagValue::Size(size))?;
    }

    let log_mb = i64::from(region_size_log_mb(ctx.heap_region_size()));

    if ctx.is_default(FlagKey::RegionEntries) {
        let entries = REGION_ENTRIES_BASE * (log_mb + 1);
        set(ctx, &mut changed, FlagKey::RegionEntries, FlagValue::Intx(entries))?;
    }

    if ctx.is_default(FlagKey::SparseRegionEntries) {
        let entries = SPARSE_REGION_ENTRIES_BASE * (log_mb + 1);
        set(ctx, &mut changed, FlagKey::SparseRegionEntries, FlagValue::Intx(entries))?;
    }

    if ctx.is_default(FlagKey::PauseIntervalMillis) {
        let interval = ctx.max_pause_millis().saturating_add(1);
        set(ctx, &mut changed, FlagKey::PauseIntervalMillis, FlagValue::Uintx(interval))?;
    }

    Ok(changed)
}

fn set(
    ctx: &mut FlagContext,
    changed: &mut Vec<(FlagKey, FlagValue)>,
    key: FlagKey,
    value: FlagValue,
) -> FlagResult<()> {
    ctx.set(key, value, FlagOrigin::Ergonomic)?;
    changed.push((key, value));
    Ok(())
}
