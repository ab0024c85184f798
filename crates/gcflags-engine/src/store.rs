//! Flag store
//!
//! `FlagStore` owns the live [`FlagContext`] behind a read-write lock and
//! drives the constraint registry for the two situations flags change:
//!
//! - **Startup**: arguments are committed unchecked, ergonomics fills in
//!   sentinels, then every constraint runs phase by phase and all
//!   violations are reported together.
//! - **Runtime**: a manageable flag is validated against the live sibling
//!   values under the write lock and committed only if accepted.

use crate::config::FlagsFile;
use crate::constraints::ConstraintRegistry;
use crate::context::{AddressWidth, FlagContext};
use crate::ergo;
use crate::error::{ConstraintViolation, FlagError, FlagResult};
use crate::flags::{ConstraintPhase, FlagKey, FlagOrigin, FlagValue};
use crate::parse::parse_arg;
use parking_lot::RwLock;

/// Outcome of a successful startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    /// Values filled in by ergonomics
    pub ergonomic: Vec<(FlagKey, FlagValue)>,
}

/// Live flag values plus their constraints.
#[derive(Debug)]
pub struct FlagStore {
    context: RwLock<FlagContext>,
    registry: ConstraintRegistry,
}

impl FlagStore {
    /// Create a store over an existing context and registry.
    pub fn new(context: FlagContext, registry: ConstraintRegistry) -> Self {
        Self {
            context: RwLock::new(context),
            registry,
        }
    }

    /// Default context and every collector constraint.
    pub fn with_defaults() -> Self {
        Self::new(FlagContext::new(), ConstraintRegistry::with_defaults())
    }

    /// The constraint registry.
    pub fn registry(&self) -> &ConstraintRegistry {
        &self.registry
    }

    /// Copy of the current context.
    pub fn snapshot(&self) -> FlagContext {
        self.context.read().clone()
    }

    /// Current value of one flag.
    pub fn value(&self, key: FlagKey) -> FlagValue {
        self.context.read().value(key)
    }

    /// Change the target address width.
    pub fn set_address_width(&self, width: AddressWidth) {
        self.context.write().set_address_width(width);
    }

    /// Commit a value without validation.
    pub fn set(&self, key: FlagKey, value: FlagValue, origin: FlagOrigin) -> FlagResult<()> {
        self.context.write().set(key, value, origin)
    }

    /// Parse and commit one `-XX:` argument.
    pub fn apply_arg(&self, arg: &str, origin: FlagOrigin) -> FlagResult<()> {
        let parsed = parse_arg(arg)?;
        self.set(parsed.key, parsed.value, origin)
    }

    /// Commit every entry of a flags file with [`FlagOrigin::ConfigFile`].
    ///
    /// The file is resolved completely before anything is committed.
    pub fn apply_file(&self, file: &FlagsFile) -> FlagResult<()> {
        let entries = file.entries()?;
        let mut ctx = self.context.write();
        if let Some(width) = file.address_width()? {
            ctx.set_address_width(width);
        }
        for (key, value) in entries {
            ctx.set(key, value, FlagOrigin::ConfigFile)?;
        }
        Ok(())
    }

    /// Validate every flag whose constraint runs in `phase`.
    ///
    /// Returns all violations, in flag table order.
    pub fn check_constraints(&self, phase: ConstraintPhase, verbose: bool) -> Vec<ConstraintViolation> {
        let ctx = self.context.read();
        check_phase(&self.registry, &ctx, phase, verbose)
    }

    /// Run ergonomics and every constraint phase.
    ///
    /// Fails with [`FlagError::Violations`] if any flag is rejected.
    pub fn startup(&self, verbose: bool) -> FlagResult<StartupReport> {
        let mut ctx = self.context.write();
        let ergonomic = ergo::apply(&mut ctx)?;

        let violations: Vec<ConstraintViolation> = ConstraintPhase::ALL
            .iter()
            .flat_map(|&phase| check_phase(&self.registry, &ctx, phase, verbose))
            .collect();

        if violations.is_empty() {
            Ok(StartupReport { ergonomic })
        } else {
            Err(FlagError::Violations(violations))
        }
    }

    /// Change a manageable flag at runtime.
    ///
    /// The new value is checked against the live sibling values. On
    /// rejection the previous value stays in effect.
    pub fn set_manageable(&self, key: FlagKey, value: FlagValue) -> FlagResult<()> {
        if !key.descriptor().manageable {
            return Err(FlagError::NotManageable(key));
        }
        if value.kind() != key.kind() {
            return Err(FlagError::TypeMismatch {
                flag: key,
                expected: key.kind(),
            });
        }

        let mut ctx = self.context.write();
        self.registry.validate(&ctx, key, value, true, false)?;
        ctx.set(key, value, FlagOrigin::Management)
    }
}

impl Default for FlagStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn check_phase(
    registry: &ConstraintRegistry,
    ctx: &FlagContext,
    phase: ConstraintPhase,
    verbose: bool,
) -> Vec<ConstraintViolation> {
    FlagKey::ALL
        .iter()
        .filter(|key| key.descriptor().phase == phase)
        .filter_map(|&key| registry.validate_current(ctx, key, verbose).err())
        .collect()
}
