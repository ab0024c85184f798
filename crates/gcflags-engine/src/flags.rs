//! Flag keys, values and the descriptor table.
//!
//! Every flag the collector understands has exactly one entry in [`FLAGS`],
//! indexed by the [`FlagKey`] discriminant.

use crate::defaults::{
    DEFAULT_MAX_HEAP_SIZE, DEFAULT_MAX_NEW_SIZE_PERCENT, DEFAULT_MAX_PAUSE_MILLIS,
    DEFAULT_NEW_SIZE, DEFAULT_NEW_SIZE_PERCENT,
};
use crate::error::FlagError;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a collector flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagKey {
    /// `UseG1GC`: whether the region collector is the active collector
    UseG1Gc,
    /// `G1RSetRegionEntries`: coarse remembered-set entries per region
    RegionEntries,
    /// `G1RSetSparseRegionEntries`: sparse remembered-set entries per region
    SparseRegionEntries,
    /// `G1HeapRegionSize`: region size in bytes
    HeapRegionSize,
    /// `G1NewSizePercent`: young generation minimum, percent of heap
    NewSizePercent,
    /// `G1MaxNewSizePercent`: young generation maximum, percent of heap
    MaxNewSizePercent,
    /// `MaxGCPauseMillis`: pause time goal
    MaxPauseMillis,
    /// `GCPauseIntervalMillis`: time slice the pause goal applies to
    PauseIntervalMillis,
    /// `NewSize`: initial young generation size in bytes
    NewSize,
    /// `MaxHeapSize`: maximum heap size in bytes
    MaxHeapSize,
}

impl FlagKey {
    /// Number of flags.
    pub const COUNT: usize = 10;

    /// Every flag, in descriptor table order.
    pub const ALL: [FlagKey; Self::COUNT] = [
        FlagKey::UseG1Gc,
        FlagKey::RegionEntries,
        FlagKey::SparseRegionEntries,
        FlagKey::HeapRegionSize,
        FlagKey::NewSizePercent,
        FlagKey::MaxNewSizePercent,
        FlagKey::MaxPauseMillis,
        FlagKey::PauseIntervalMillis,
        FlagKey::NewSize,
        FlagKey::MaxHeapSize,
    ];

    /// Position of this flag in the descriptor table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Descriptor for this flag.
    pub fn descriptor(self) -> &'static FlagDescriptor {
        &FLAGS[self.index()]
    }

    /// Command-line name of the flag.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Declared value kind.
    pub fn kind(self) -> FlagKind {
        self.descriptor().kind
    }

    /// Look up a flag by its command-line name.
    pub fn from_name(name: &str) -> Option<FlagKey> {
        NAME_INDEX.get(name).copied()
    }
}

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlagKey {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlagKey::from_name(s).ok_or_else(|| FlagError::UnknownFlag(s.to_string()))
    }
}

static NAME_INDEX: Lazy<FxHashMap<&'static str, FlagKey>> = Lazy::new(|| {
    FlagKey::ALL
        .iter()
        .map(|&key| (key.name(), key))
        .collect()
});

/// Value kind of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Boolean switch
    Bool,
    /// Signed machine-word integer
    Intx,
    /// Unsigned machine-word integer
    Uintx,
    /// Byte count
    Size,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagKind::Bool => "bool",
            FlagKind::Intx => "intx",
            FlagKind::Uintx => "uintx",
            FlagKind::Size => "size_t",
        };
        f.write_str(name)
    }
}

/// A flag value, committed or candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Intx(i64),
    /// Unsigned integer value
    Uintx(u64),
    /// Byte count
    Size(u64),
}

impl FlagValue {
    /// Kind of this value.
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Intx(_) => FlagKind::Intx,
            FlagValue::Uintx(_) => FlagKind::Uintx,
            FlagValue::Size(_) => FlagKind::Size,
        }
    }

    /// Boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed payload, if this is an `Intx`.
    pub fn as_intx(&self) -> Option<i64> {
        match self {
            FlagValue::Intx(v) => Some(*v),
            _ => None,
        }
    }

    /// Unsigned payload, if this is a `Uintx`.
    pub fn as_uintx(&self) -> Option<u64> {
        match self {
            FlagValue::Uintx(v) => Some(*v),
            _ => None,
        }
    }

    /// Byte count, if this is a `Size`.
    pub fn as_size(&self) -> Option<u64> {
        match self {
            FlagValue::Size(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Intx(v) => write!(f, "{}", v),
            FlagValue::Uintx(v) | FlagValue::Size(v) => write!(f, "{}", v),
        }
    }
}

/// Where a flag's current value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOrigin {
    /// Compiled-in default
    Default,
    /// `-XX:` argument on the command line
    CommandLine,
    /// `-XX:` argument from the options environment variable
    EnvironmentVariable,
    /// Flags file
    ConfigFile,
    /// Derived automatically from other settings
    Ergonomic,
    /// Runtime update through the management interface
    Management,
}

impl FlagOrigin {
    /// Whether the value was supplied by the user.
    pub fn is_explicit(self) -> bool {
        matches!(
            self,
            FlagOrigin::CommandLine
                | FlagOrigin::EnvironmentVariable
                | FlagOrigin::ConfigFile
                | FlagOrigin::Management
        )
    }

    /// Whether the value is still the compiled-in default.
    pub fn is_default(self) -> bool {
        self == FlagOrigin::Default
    }
}

impl fmt::Display for FlagOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagOrigin::Default => "default",
            FlagOrigin::CommandLine => "command line",
            FlagOrigin::EnvironmentVariable => "environment",
            FlagOrigin::ConfigFile => "config file",
            FlagOrigin::Ergonomic => "ergonomic",
            FlagOrigin::Management => "management",
        };
        f.write_str(name)
    }
}

/// Point in startup at which a flag's constraint is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConstraintPhase {
    /// After ergonomics has filled in derived values
    AfterErgo,
    /// After the heap layout (region bounds) is initialized
    AfterMemoryInit,
}

impl ConstraintPhase {
    /// Every phase, in execution order.
    pub const ALL: [ConstraintPhase; 2] =
        [ConstraintPhase::AfterErgo, ConstraintPhase::AfterMemoryInit];
}

impl fmt::Display for ConstraintPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintPhase::AfterErgo => "after-ergo",
            ConstraintPhase::AfterMemoryInit => "after-memory-init",
        };
        f.write_str(name)
    }
}

/// Static description of one flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagDescriptor {
    /// Key identifying the flag
    pub key: FlagKey,
    /// Command-line name
    pub name: &'static str,
    /// Declared kind
    pub kind: FlagKind,
    /// Compiled-in default
    pub default: FlagValue,
    /// Whether the flag may be changed after startup
    pub manageable: bool,
    /// When the flag's constraint runs
    pub phase: ConstraintPhase,
    /// One-line description
    pub description: &'static str,
}

/// Descriptor table, indexed by [`FlagKey::index`].
pub static FLAGS: [FlagDescriptor; FlagKey::COUNT] = [
    FlagDescriptor {
        key: FlagKey::UseG1Gc,
        name: "UseG1GC",
        kind: FlagKind::Bool,
        default: FlagValue::Bool(true),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Use the generational region collector",
    },
    FlagDescriptor {
        key: FlagKey::RegionEntries,
        name: "G1RSetRegionEntries",
        kind: FlagKind::Intx,
        default: FlagValue::Intx(0),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Max number of regions for which coarse remembered-set entries are kept (0 = ergonomic)",
    },
    FlagDescriptor {
        key: FlagKey::SparseRegionEntries,
        name: "G1RSetSparseRegionEntries",
        kind: FlagKind::Intx,
        default: FlagValue::Intx(0),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Max number of sparse remembered-set entries per region (0 = ergonomic)",
    },
    FlagDescriptor {
        key: FlagKey::HeapRegionSize,
        name: "G1HeapRegionSize",
        kind: FlagKind::Size,
        default: FlagValue::Size(0),
        manageable: false,
        phase: ConstraintPhase::AfterMemoryInit,
        description: "Size of the heap regions (0 = ergonomic)",
    },
    FlagDescriptor {
        key: FlagKey::NewSizePercent,
        name: "G1NewSizePercent",
        kind: FlagKind::Uintx,
        default: FlagValue::Uintx(DEFAULT_NEW_SIZE_PERCENT),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Percentage of the heap to use as minimum young generation size",
    },
    FlagDescriptor {
        key: FlagKey::MaxNewSizePercent,
        name: "G1MaxNewSizePercent",
        kind: FlagKind::Uintx,
        default: FlagValue::Uintx(DEFAULT_MAX_NEW_SIZE_PERCENT),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Percentage of the heap to use as maximum young generation size",
    },
    FlagDescriptor {
        key: FlagKey::MaxPauseMillis,
        name: "MaxGCPauseMillis",
        kind: FlagKind::Uintx,
        default: FlagValue::Uintx(DEFAULT_MAX_PAUSE_MILLIS),
        manageable: true,
        phase: ConstraintPhase::AfterErgo,
        description: "Adaptive pause time goal in milliseconds",
    },
    FlagDescriptor {
        key: FlagKey::PauseIntervalMillis,
        name: "GCPauseIntervalMillis",
        kind: FlagKind::Uintx,
        default: FlagValue::Uintx(0),
        manageable: true,
        phase: ConstraintPhase::AfterErgo,
        description: "Time slice for the pause time goal in milliseconds (0 = ergonomic)",
    },
    FlagDescriptor {
        key: FlagKey::NewSize,
        name: "NewSize",
        kind: FlagKind::Size,
        default: FlagValue::Size(DEFAULT_NEW_SIZE),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Initial young generation size in bytes",
    },
    FlagDescriptor {
        key: FlagKey::MaxHeapSize,
        name: "MaxHeapSize",
        kind: FlagKind::Size,
        default: FlagValue::Size(DEFAULT_MAX_HEAP_SIZE),
        manageable: false,
        phase: ConstraintPhase::AfterErgo,
        description: "Maximum heap size in bytes",
    },
];
