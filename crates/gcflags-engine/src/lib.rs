//! gcflags Engine
//!
//! Validation of configuration flags for a generational, region-based
//! garbage collector:
//! - **Flags**: the descriptor table, values and origins (`flags` module)
//! - **Context**: the live configuration read by validators (`context` module)
//! - **Constraints**: one predicate per flag, looked up by key (`constraints` module)
//! - **Store**: parsing, ergonomics and runtime updates around the constraints
//!   (`parse`, `config`, `ergo`, `store` modules)
//!
//! # Example
//!
//! ```rust,ignore
//! use gcflags_engine::{FlagOrigin, FlagStore};
//!
//! let store = FlagStore::with_defaults();
//! store.apply_arg("-XX:MaxGCPauseMillis=50", FlagOrigin::CommandLine)?;
//! store.apply_arg("-XX:GCPauseIntervalMillis=40", FlagOrigin::CommandLine)?;
//!
//! // Fails: the interval must exceed the maximum pause.
//! let err = store.startup(true).unwrap_err();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Default constants for flags and region bounds
pub mod defaults;

/// Error types
pub mod error;

/// Flag keys, kinds, values, origins and the descriptor table
pub mod flags;

/// Region size bounds and heap alignment
pub mod region;

/// Configuration context read by the validators
pub mod context;

/// Diagnostic output for rejected values
pub mod diagnostics;

/// Constraint validators and their registry
pub mod constraints;

// ============================================================================
// Supporting Modules
// ============================================================================

/// `-XX:` argument parsing
pub mod parse;

/// TOML flags file and environment options
pub mod config;

/// Ergonomic derivation of sentinel defaults
pub mod ergo;

/// Locked flag store with startup and runtime update paths
pub mod store;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FlagsFile;
pub use constraints::{Candidate, Constraint, ConstraintRegistry};
pub use context::{AddressWidth, FlagContext};
pub use diagnostics::{CollectingSink, DiagnosticSink, StderrSink};
pub use error::{ConstraintViolation, FlagError};
pub use flags::{ConstraintPhase, FlagDescriptor, FlagKey, FlagKind, FlagOrigin, FlagValue};
pub use region::{max_heap_alignment, RegionBounds};
pub use store::{FlagStore, StartupReport};
