//! Flag constraint validators
//!
//! Each validator guards one flag. It receives the candidate value and
//! whether the user supplied it, reads sibling flags from the
//! [`FlagContext`], and either accepts or returns a [`ConstraintViolation`].
//! Validators never modify the context.
//!
//! All validators accept unconditionally when the region collector is not
//! the active collector.

use crate::context::{AddressWidth, FlagContext};
use crate::defaults::MAX_NEW_SIZE_64;
use crate::diagnostics::{DiagnosticSink, StderrSink};
use crate::error::ConstraintViolation;
use crate::flags::{FlagKey, FlagValue};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// A value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The proposed value
    pub value: FlagValue,
    /// Whether the value was supplied by the user rather than defaulted
    pub explicitly_set: bool,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(value: FlagValue, explicitly_set: bool) -> Self {
        Self {
            value,
            explicitly_set,
        }
    }

    /// A user-supplied candidate.
    pub fn explicit(value: FlagValue) -> Self {
        Self::new(value, true)
    }

    /// A defaulted or ergonomically derived candidate.
    pub fn implicit(value: FlagValue) -> Self {
        Self::new(value, false)
    }
}

/// Validation predicate bound to a single flag.
pub trait Constraint: Send + Sync {
    /// The flag this constraint guards.
    fn key(&self) -> FlagKey;

    /// Accept or reject `candidate` given the current sibling values.
    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation>;
}

impl fmt::Debug for dyn Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint").field("key", &self.key()).finish()
    }
}

fn kind_violation(key: FlagKey, value: FlagValue) -> ConstraintViolation {
    ConstraintViolation::new(
        key,
        format!("{} ({}) is not a {} value", key, value, key.kind()),
    )
}

fn intx_of(key: FlagKey, candidate: Candidate) -> Result<i64, ConstraintViolation> {
    candidate
        .value
        .as_intx()
        .ok_or_else(|| kind_violation(key, candidate.value))
}

fn uintx_of(key: FlagKey, candidate: Candidate) -> Result<u64, ConstraintViolation> {
    candidate
        .value
        .as_uintx()
        .ok_or_else(|| kind_violation(key, candidate.value))
}

fn bytes_of(key: FlagKey, candidate: Candidate) -> Result<u64, ConstraintViolation> {
    candidate
        .value
        .as_size()
        .ok_or_else(|| kind_violation(key, candidate.value))
}

// ============================================================================
// Validators
// ============================================================================

/// Remembered-set entry limits must be at least 1 once set by the user.
///
/// The default of 0 means the limit is derived ergonomically.
#[derive(Debug, Clone, Copy)]
pub struct RegionEntriesConstraint {
    key: FlagKey,
}

impl RegionEntriesConstraint {
    /// Constraint for `G1RSetRegionEntries`.
    pub fn coarse() -> Self {
        Self {
            key: FlagKey::RegionEntries,
        }
    }

    /// Constraint for `G1RSetSparseRegionEntries`.
    pub fn sparse() -> Self {
        Self {
            key: FlagKey::SparseRegionEntries,
        }
    }
}

impl Constraint for RegionEntriesConstraint {
    fn key(&self) -> FlagKey {
        self.key
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() {
            return Ok(());
        }
        let value = intx_of(self.key, candidate)?;
        if candidate.explicitly_set && value < 1 {
            return Err(ConstraintViolation::new(
                self.key,
                format!("{} ({}) must be greater than or equal to 1", self.key, value),
            ));
        }
        Ok(())
    }
}

/// `G1HeapRegionSize` must not be below the minimum region size once set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapRegionSizeConstraint;

impl Constraint for HeapRegionSizeConstraint {
    fn key(&self) -> FlagKey {
        FlagKey::HeapRegionSize
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() {
            return Ok(());
        }
        let value = bytes_of(self.key(), candidate)?;
        if candidate.explicitly_set && value < ctx.region_bounds().min_size() {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} ({}) must be greater than or equal to ergonomic heap region minimum size",
                    self.key(),
                    value
                ),
            ));
        }
        Ok(())
    }
}

/// `G1NewSizePercent` must not exceed `G1MaxNewSizePercent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewSizePercentConstraint;

impl Constraint for NewSizePercentConstraint {
    fn key(&self) -> FlagKey {
        FlagKey::NewSizePercent
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() {
            return Ok(());
        }
        let value = uintx_of(self.key(), candidate)?;
        let max = ctx.max_new_size_percent();
        if value > max {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} ({}) must be less than or equal to {} ({})",
                    self.key(),
                    value,
                    FlagKey::MaxNewSizePercent,
                    max
                ),
            ));
        }
        Ok(())
    }
}

/// `G1MaxNewSizePercent` must not be below `G1NewSizePercent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxNewSizePercentConstraint;

impl Constraint for MaxNewSizePercentConstraint {
    fn key(&self) -> FlagKey {
        FlagKey::MaxNewSizePercent
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() {
            return Ok(());
        }
        let value = uintx_of(self.key(), candidate)?;
        let min = ctx.new_size_percent();
        if value < min {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} ({}) must be greater than or equal to {} ({})",
                    self.key(),
                    value,
                    FlagKey::NewSizePercent,
                    min
                ),
            ));
        }
        Ok(())
    }
}

/// A user-set `MaxGCPauseMillis` must be shorter than `GCPauseIntervalMillis`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPauseConstraint;

impl Constraint for MaxPauseConstraint {
    fn key(&self) -> FlagKey {
        FlagKey::MaxPauseMillis
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() {
            return Ok(());
        }
        let value = uintx_of(self.key(), candidate)?;
        let interval = ctx.pause_interval_millis();
        if candidate.explicitly_set && value >= interval {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} ({}) must be less than {} ({})",
                    self.key(),
                    value,
                    FlagKey::PauseIntervalMillis,
                    interval
                ),
            ));
        }
        Ok(())
    }
}

/// A user-set `GCPauseIntervalMillis` must be at least 1, requires a
/// user-set `MaxGCPauseMillis`, and must exceed it.
///
/// The three conditions are checked in that order and the first failure
/// is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseIntervalConstraint;

impl Constraint for PauseIntervalConstraint {
    fn key(&self) -> FlagKey {
        FlagKey::PauseIntervalMillis
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() || !candidate.explicitly_set {
            return Ok(());
        }
        let value = uintx_of(self.key(), candidate)?;

        if value < 1 {
            return Err(ConstraintViolation::new(
                self.key(),
                format!("{} ({}) must be greater than or equal to 1", self.key(), value),
            ));
        }

        if ctx.is_default(FlagKey::MaxPauseMillis) {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} cannot be set without setting {}",
                    self.key(),
                    FlagKey::MaxPauseMillis
                ),
            ));
        }

        let max_pause = ctx.max_pause_millis();
        if value <= max_pause {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} ({}) must be greater than {} ({})",
                    self.key(),
                    value,
                    FlagKey::MaxPauseMillis,
                    max_pause
                ),
            ));
        }
        Ok(())
    }
}

/// On 64-bit targets `NewSize` must keep `NewSize / region size` within a
/// 32-bit unsigned integer.
///
/// On 32-bit targets the quotient always fits and the check is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewSizeConstraint;

impl Constraint for NewSizeConstraint {
    fn key(&self) -> FlagKey {
        FlagKey::NewSize
    }

    fn check(&self, ctx: &FlagContext, candidate: Candidate) -> Result<(), ConstraintViolation> {
        if !ctx.use_region_gc() || ctx.address_width() != AddressWidth::Bits64 {
            return Ok(());
        }
        let value = bytes_of(self.key(), candidate)?;
        if value > MAX_NEW_SIZE_64 {
            return Err(ConstraintViolation::new(
                self.key(),
                format!(
                    "{} ({}) must be less than ergonomic maximum value",
                    self.key(),
                    value
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Mapping from flag to its constraint, plus the diagnostic channel.
#[derive(Clone)]
pub struct ConstraintRegistry {
    constraints: FxHashMap<FlagKey, Arc<dyn Constraint>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for ConstraintRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.keys();
        keys.sort();
        f.debug_struct("ConstraintRegistry")
            .field("keys", &keys)
            .finish()
    }
}

impl ConstraintRegistry {
    /// Create an empty registry reporting to stderr.
    pub fn new() -> Self {
        Self {
            constraints: FxHashMap::default(),
            sink: Arc::new(StderrSink::auto()),
        }
    }

    /// Registry with every collector constraint registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(RegionEntriesConstraint::coarse());
        registry.register(RegionEntriesConstraint::sparse());
        registry.register(HeapRegionSizeConstraint);
        registry.register(NewSizePercentConstraint);
        registry.register(MaxNewSizePercentConstraint);
        registry.register(MaxPauseConstraint);
        registry.register(PauseIntervalConstraint);
        registry.register(NewSizeConstraint);
        registry
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Register a constraint, returning the one it replaces.
    pub fn register<C: Constraint + 'static>(&mut self, constraint: C) -> Option<Arc<dyn Constraint>> {
        self.constraints.insert(constraint.key(), Arc::new(constraint))
    }

    /// Constraint registered for `key`.
    pub fn get(&self, key: FlagKey) -> Option<&dyn Constraint> {
        self.constraints.get(&key).map(Arc::as_ref)
    }

    /// Whether `key` has a constraint.
    pub fn contains(&self, key: FlagKey) -> bool {
        self.constraints.contains_key(&key)
    }

    /// Flags that have a constraint, in no particular order.
    pub fn keys(&self) -> Vec<FlagKey> {
        self.constraints.keys().copied().collect()
    }

    /// Number of registered constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether no constraints are registered.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Validate a candidate value for `key`.
    ///
    /// Flags without a constraint always pass. A rejection is reported to
    /// the diagnostic sink when `verbose` is set and returned either way.
    pub fn validate(
        &self,
        ctx: &FlagContext,
        key: FlagKey,
        value: FlagValue,
        explicitly_set: bool,
        verbose: bool,
    ) -> Result<(), ConstraintViolation> {
        let Some(constraint) = self.constraints.get(&key) else {
            return Ok(());
        };
        constraint
            .check(ctx, Candidate::new(value, explicitly_set))
            .inspect_err(|violation| {
                if verbose {
                    self.sink.emit(violation);
                }
            })
    }

    /// Validate the value `key` currently holds in `ctx`.
    pub fn validate_current(
        &self,
        ctx: &FlagContext,
        key: FlagKey,
        verbose: bool,
    ) -> Result<(), ConstraintViolation> {
        self.validate(ctx, key, ctx.value(key), ctx.is_explicit(key), verbose)
    }
}

impl Default for ConstraintRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::flags::FlagOrigin;

    fn registry_with_sink() -> (ConstraintRegistry, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let registry = ConstraintRegistry::with_defaults().with_sink(sink.clone());
        (registry, sink)
    }

    fn inactive_context() -> FlagContext {
        let mut ctx = FlagContext::new();
        ctx.set(FlagKey::UseG1Gc, FlagValue::Bool(false), FlagOrigin::CommandLine)
            .unwrap();
        ctx
    }

    #[test]
    fn test_region_entries_minimum() {
        let ctx = FlagContext::new();
        let coarse = RegionEntriesConstraint::coarse();
        for value in [-5, 0] {
            let err = coarse
                .check(&ctx, Candidate::explicit(FlagValue::Intx(value)))
                .unwrap_err();
            assert_eq!(
                err.message,
                format!("G1RSetRegionEntries ({}) must be greater than or equal to 1", value)
            );
        }
        for value in [1, 256, i64::MAX] {
            assert!(coarse
                .check(&ctx, Candidate::explicit(FlagValue::Intx(value)))
                .is_ok());
        }
    }

    #[test]
    fn test_region_entries_default_sentinel_is_skipped() {
        let ctx = FlagContext::new();
        assert!(RegionEntriesConstraint::coarse()
            .check(&ctx, Candidate::implicit(FlagValue::Intx(0)))
            .is_ok());
        assert!(RegionEntriesConstraint::sparse()
            .check(&ctx, Candidate::implicit(FlagValue::Intx(0)))
            .is_ok());
    }

    #[test]
    fn test_sparse_region_entries_message() {
        let ctx = FlagContext::new();
        let err = RegionEntriesConstraint::sparse()
            .check(&ctx, Candidate::explicit(FlagValue::Intx(0)))
            .unwrap_err();
        assert_eq!(err.flag, FlagKey::SparseRegionEntries);
        assert_eq!(
            err.message,
            "G1RSetSparseRegionEntries (0) must be greater than or equal to 1"
        );
    }

    #[test]
    fn test_heap_region_size_minimum() {
        let ctx = FlagContext::new();
        let min = ctx.region_bounds().min_size();
        let err = HeapRegionSizeConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Size(min - 1)))
            .unwrap_err();
        assert_eq!(
            err.message,
            format!(
                "G1HeapRegionSize ({}) must be greater than or equal to ergonomic heap region minimum size",
                min - 1
            )
        );
        assert!(HeapRegionSizeConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Size(min)))
            .is_ok());
        assert!(HeapRegionSizeConstraint
            .check(&ctx, Candidate::implicit(FlagValue::Size(0)))
            .is_ok());
    }

    #[test]
    fn test_heap_region_size_minimum_follows_bounds() {
        use crate::defaults::{M, MAX_REGION_SIZE, TARGET_REGION_NUMBER};
        use crate::region::RegionBounds;

        let ctx = FlagContext::new()
            .with_region_bounds(RegionBounds::new(2 * M, MAX_REGION_SIZE, TARGET_REGION_NUMBER));
        let err = HeapRegionSizeConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Size(M)))
            .unwrap_err();
        assert_eq!(err.flag, FlagKey::HeapRegionSize);
        assert!(HeapRegionSizeConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Size(2 * M)))
            .is_ok());

        // 1 MiB is fine under the default bounds
        assert!(HeapRegionSizeConstraint
            .check(&FlagContext::new(), Candidate::explicit(FlagValue::Size(M)))
            .is_ok());
    }

    #[test]
    fn test_percent_pair_is_symmetric() {
        let mut ctx = FlagContext::new();
        ctx.set(FlagKey::NewSizePercent, FlagValue::Uintx(20), FlagOrigin::Default)
            .unwrap();
        ctx.set(FlagKey::MaxNewSizePercent, FlagValue::Uintx(10), FlagOrigin::CommandLine)
            .unwrap();

        let err = NewSizePercentConstraint
            .check(&ctx, Candidate::implicit(FlagValue::Uintx(20)))
            .unwrap_err();
        assert_eq!(
            err.message,
            "G1NewSizePercent (20) must be less than or equal to G1MaxNewSizePercent (10)"
        );

        let err = MaxNewSizePercentConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(10)))
            .unwrap_err();
        assert_eq!(
            err.message,
            "G1MaxNewSizePercent (10) must be greater than or equal to G1NewSizePercent (20)"
        );
    }

    #[test]
    fn test_percent_pair_equal_values_pass() {
        let mut ctx = FlagContext::new();
        ctx.set(FlagKey::NewSizePercent, FlagValue::Uintx(30), FlagOrigin::CommandLine)
            .unwrap();
        ctx.set(FlagKey::MaxNewSizePercent, FlagValue::Uintx(30), FlagOrigin::CommandLine)
            .unwrap();
        assert!(NewSizePercentConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(30)))
            .is_ok());
        assert!(MaxNewSizePercentConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(30)))
            .is_ok());
    }

    #[test]
    fn test_max_pause_below_interval() {
        let mut ctx = FlagContext::new();
        ctx.set(FlagKey::PauseIntervalMillis, FlagValue::Uintx(100), FlagOrigin::CommandLine)
            .unwrap();

        let err = MaxPauseConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(100)))
            .unwrap_err();
        assert_eq!(
            err.message,
            "MaxGCPauseMillis (100) must be less than GCPauseIntervalMillis (100)"
        );
        assert!(MaxPauseConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(99)))
            .is_ok());
        // Not user-set: skipped even though 200 >= 100
        assert!(MaxPauseConstraint
            .check(&ctx, Candidate::implicit(FlagValue::Uintx(200)))
            .is_ok());
    }

    #[test]
    fn test_pause_interval_precedence() {
        // value < 1 wins over max pause being unset
        let ctx = FlagContext::new();
        let err = PauseIntervalConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(0)))
            .unwrap_err();
        assert_eq!(
            err.message,
            "GCPauseIntervalMillis (0) must be greater than or equal to 1"
        );

        // max pause unset wins over value <= max pause
        let err = PauseIntervalConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(10)))
            .unwrap_err();
        assert_eq!(
            err.message,
            "GCPauseIntervalMillis cannot be set without setting MaxGCPauseMillis"
        );
    }

    #[test]
    fn test_pause_interval_requires_max_pause_even_when_larger() {
        let ctx = FlagContext::new();
        assert!(PauseIntervalConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(10_000)))
            .is_err());
    }

    #[test]
    fn test_pause_interval_above_max_pause() {
        let mut ctx = FlagContext::new();
        ctx.set(FlagKey::MaxPauseMillis, FlagValue::Uintx(50), FlagOrigin::CommandLine)
            .unwrap();

        let err = PauseIntervalConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(50)))
            .unwrap_err();
        assert_eq!(
            err.message,
            "GCPauseIntervalMillis (50) must be greater than MaxGCPauseMillis (50)"
        );
        assert!(PauseIntervalConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(51)))
            .is_ok());
    }

    #[test]
    fn test_ergonomic_max_pause_counts_as_set() {
        let mut ctx = FlagContext::new();
        ctx.set(FlagKey::MaxPauseMillis, FlagValue::Uintx(200), FlagOrigin::Ergonomic)
            .unwrap();
        assert!(PauseIntervalConstraint
            .check(&ctx, Candidate::explicit(FlagValue::Uintx(201)))
            .is_ok());
    }

    #[test]
    fn test_new_size_limit_depends_on_address_width() {
        let too_big = FlagValue::Size(MAX_NEW_SIZE_64 + 1);

        let wide = FlagContext::new().with_address_width(AddressWidth::Bits64);
        let err = NewSizeConstraint
            .check(&wide, Candidate::implicit(too_big))
            .unwrap_err();
        assert_eq!(
            err.message,
            format!(
                "NewSize ({}) must be less than ergonomic maximum value",
                MAX_NEW_SIZE_64 + 1
            )
        );
        assert!(NewSizeConstraint
            .check(&wide, Candidate::explicit(FlagValue::Size(MAX_NEW_SIZE_64)))
            .is_ok());

        let narrow = FlagContext::new().with_address_width(AddressWidth::Bits32);
        assert!(NewSizeConstraint.check(&narrow, Candidate::explicit(too_big)).is_ok());
    }

    #[test]
    fn test_inactive_collector_accepts_everything() {
        let ctx = inactive_context();
        let (registry, sink) = registry_with_sink();

        assert!(registry
            .validate(&ctx, FlagKey::RegionEntries, FlagValue::Intx(-5), true, true)
            .is_ok());
        assert!(registry
            .validate(&ctx, FlagKey::HeapRegionSize, FlagValue::Size(1), true, true)
            .is_ok());
        assert!(registry
            .validate(&ctx, FlagKey::MaxNewSizePercent, FlagValue::Uintx(0), true, true)
            .is_ok());
        assert!(registry
            .validate(&ctx, FlagKey::PauseIntervalMillis, FlagValue::Uintx(0), true, true)
            .is_ok());
        assert!(registry
            .validate(&ctx, FlagKey::NewSize, FlagValue::Size(u64::MAX), true, true)
            .is_ok());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_verbose_controls_diagnostics() {
        let ctx = FlagContext::new();
        let (registry, sink) = registry_with_sink();

        let quiet = registry.validate(&ctx, FlagKey::RegionEntries, FlagValue::Intx(0), true, false);
        assert!(quiet.is_err());
        assert!(sink.lines().is_empty());

        let loud = registry.validate(&ctx, FlagKey::RegionEntries, FlagValue::Intx(0), true, true);
        assert!(loud.is_err());
        assert_eq!(
            sink.lines(),
            vec!["G1RSetRegionEntries (0) must be greater than or equal to 1"]
        );
    }

    #[test]
    fn test_unconstrained_flag_passes() {
        let ctx = FlagContext::new();
        let (registry, _sink) = registry_with_sink();
        assert!(!registry.contains(FlagKey::MaxHeapSize));
        assert!(registry
            .validate(&ctx, FlagKey::MaxHeapSize, FlagValue::Size(0), true, true)
            .is_ok());
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let ctx = FlagContext::new();
        let (registry, _sink) = registry_with_sink();
        let err = registry
            .validate(&ctx, FlagKey::NewSizePercent, FlagValue::Bool(true), true, false)
            .unwrap_err();
        assert_eq!(err.message, "G1NewSizePercent (true) is not a uintx value");
    }

    #[test]
    fn test_default_registry_covers_constrained_flags() {
        let registry = ConstraintRegistry::with_defaults();
        assert_eq!(registry.len(), 8);
        for key in [
            FlagKey::RegionEntries,
            FlagKey::SparseRegionEntries,
            FlagKey::HeapRegionSize,
            FlagKey::NewSizePercent,
            FlagKey::MaxNewSizePercent,
            FlagKey::MaxPauseMillis,
            FlagKey::PauseIntervalMillis,
            FlagKey::NewSize,
        ] {
            assert_eq!(registry.get(key).map(|c| c.key()), Some(key));
        }
    }

    #[test]
    fn test_validate_current_uses_origin() {
        let mut ctx = FlagContext::new();
        let (registry, _sink) = registry_with_sink();
        // Default origin: sentinel is exempt
        assert!(registry
            .validate_current(&ctx, FlagKey::RegionEntries, false)
            .is_ok());

        ctx.set(FlagKey::RegionEntries, FlagValue::Intx(0), FlagOrigin::CommandLine)
            .unwrap();
        assert!(registry
            .validate_current(&ctx, FlagKey::RegionEntries, false)
            .is_err());
    }
}
