//! Configuration context
//!
//! `FlagContext` holds the current value and origin of every flag together
//! with the platform facts the constraints depend on. Validators only ever
//! see it by shared reference.

use crate::error::{FlagError, FlagResult};
use crate::flags::{FlagKey, FlagOrigin, FlagValue, FLAGS};
use crate::region::RegionBounds;

/// Address width of the target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressWidth {
    /// 32-bit addresses
    Bits32,
    /// 64-bit addresses
    Bits64,
}

impl AddressWidth {
    /// Address width of the running build.
    pub fn native() -> Self {
        if cfg!(target_pointer_width = "64") {
            AddressWidth::Bits64
        } else {
            AddressWidth::Bits32
        }
    }

    /// Width in bits.
    pub fn bits(self) -> u32 {
        match self {
            AddressWidth::Bits32 => 32,
            AddressWidth::Bits64 => 64,
        }
    }

    /// Parse a width given in bits.
    pub fn from_bits(bits: u32) -> FlagResult<Self> {
        match bits {
            32 => Ok(AddressWidth::Bits32),
            64 => Ok(AddressWidth::Bits64),
            other => Err(FlagError::AddressWidth(other)),
        }
    }
}

impl Default for AddressWidth {
    fn default() -> Self {
        Self::native()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlagSlot {
    value: FlagValue,
    origin: FlagOrigin,
}

/// Current flag values plus platform facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagContext {
    slots: [FlagSlot; FlagKey::COUNT],
    address_width: AddressWidth,
    region_bounds: RegionBounds,
}

impl FlagContext {
    /// Context with every flag at its compiled-in default.
    pub fn new() -> Self {
        Self {
            slots: FLAGS.map(|d| FlagSlot {
                value: d.default,
                origin: FlagOrigin::Default,
            }),
            address_width: AddressWidth::native(),
            region_bounds: RegionBounds::default(),
        }
    }

    /// Override the address width.
    pub fn with_address_width(mut self, width: AddressWidth) -> Self {
        self.address_width = width;
        self
    }

    /// Override the region bounds.
    pub fn with_region_bounds(mut self, bounds: RegionBounds) -> Self {
        self.region_bounds = bounds;
        self
    }

    /// Set the address width in place.
    pub fn set_address_width(&mut self, width: AddressWidth) {
        self.address_width = width;
    }

    /// Address width of the target.
    pub fn address_width(&self) -> AddressWidth {
        self.address_width
    }

    /// Region bounds supplied by the sizing subsystem.
    pub fn region_bounds(&self) -> &RegionBounds {
        &self.region_bounds
    }

    /// Commit a value. Fails if the value's kind does not match the flag.
    pub fn set(&mut self, key: FlagKey, value: FlagValue, origin: FlagOrigin) -> FlagResult<()> {
        let expected = key.kind();
        if value.kind() != expected {
            return Err(FlagError::TypeMismatch {
                flag: key,
                expected,
            });
        }
        self.slots[key.index()] = FlagSlot { value, origin };
        Ok(())
    }

    /// Current value of a flag.
    pub fn value(&self, key: FlagKey) -> FlagValue {
        self.slots[key.index()].value
    }

    /// Origin of a flag's current value.
    pub fn origin(&self, key: FlagKey) -> FlagOrigin {
        self.slots[key.index()].origin
    }

    /// Whether the flag was set by the user.
    pub fn is_explicit(&self, key: FlagKey) -> bool {
        self.origin(key).is_explicit()
    }

    /// Whether the flag still holds its compiled-in default.
    pub fn is_default(&self, key: FlagKey) -> bool {
        self.origin(key).is_default()
    }

    // `set` guarantees each slot holds a value of its flag's kind, so the
    // fallbacks below are never taken.

    fn bool_value(&self, key: FlagKey) -> bool {
        self.value(key).as_bool().unwrap_or(false)
    }

    fn intx_value(&self, key: FlagKey) -> i64 {
        self.value(key).as_intx().unwrap_or(0)
    }

    fn uintx_value(&self, key: FlagKey) -> u64 {
        self.value(key).as_uintx().unwrap_or(0)
    }

    fn size_value(&self, key: FlagKey) -> u64 {
        self.value(key).as_size().unwrap_or(0)
    }

    /// `UseG1GC`
    pub fn use_region_gc(&self) -> bool {
        self.bool_value(FlagKey::UseG1Gc)
    }

    /// `G1RSetRegionEntries`
    pub fn region_entries(&self) -> i64 {
        self.intx_value(FlagKey::RegionEntries)
    }

    /// `G1RSetSparseRegionEntries`
    pub fn sparse_region_entries(&self) -> i64 {
        self.intx_value(FlagKey::SparseRegionEntries)
    }

    /// `G1HeapRegionSize`
    pub fn heap_region_size(&self) -> u64 {
        self.size_value(FlagKey::HeapRegionSize)
    }

    /// `G1NewSizePercent`
    pub fn new_size_percent(&self) -> u64 {
        self.uintx_value(FlagKey::NewSizePercent)
    }

    /// `G1MaxNewSizePercent`
    pub fn max_new_size_percent(&self) -> u64 {
        self.uintx_value(FlagKey::MaxNewSizePercent)
    }

    /// `MaxGCPauseMillis`
    pub fn max_pause_millis(&self) -> u64 {
        self.uintx_value(FlagKey::MaxPauseMillis)
    }

    /// `GCPauseIntervalMillis`
    pub fn pause_interval_millis(&self) -> u64 {
        self.uintx_value(FlagKey::PauseIntervalMillis)
    }

    /// `MaxHeapSize`
    pub fn max_heap_size(&self) -> u64 {
        self.size_value(FlagKey::MaxHeapSize)
    }
}

impl Default for FlagContext {
    fn default() -> Self {
        Self::new()
    }
}
