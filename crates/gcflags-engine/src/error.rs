//! Error types.

use crate::flags::{FlagKey, FlagKind};

/// A rejected flag value.
///
/// This is the only outcome a constraint validator can report besides
/// acceptance. `message` is the single-line diagnostic shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    /// Flag whose candidate value was rejected
    pub flag: FlagKey,
    /// Human-readable explanation naming the offending and conflicting values
    pub message: String,
}

impl ConstraintViolation {
    /// Create a new violation for `flag`.
    pub fn new(flag: FlagKey, message: impl Into<String>) -> Self {
        Self {
            flag,
            message: message.into(),
        }
    }
}

/// Errors raised while parsing, loading, or committing flag values.
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    /// Flag name is not in the descriptor table
    #[error("Unrecognized VM option '{0}'")]
    UnknownFlag(String),

    /// Argument is not of the form `-XX:Name=value` or `-XX:[+-]Name`
    #[error("Malformed argument '{0}': expected -XX:Name=value, -XX:+Name or -XX:-Name")]
    MalformedArgument(String),

    /// Value text could not be parsed for the flag's kind
    #[error("Improperly specified VM option '{name}={raw}'")]
    InvalidValue {
        /// Flag name
        name: String,
        /// Raw value text
        raw: String,
    },

    /// Value of the wrong kind supplied for a flag
    #[error("{flag} expects a {expected} value")]
    TypeMismatch {
        /// The flag
        flag: FlagKey,
        /// The kind the flag is declared with
        expected: FlagKind,
    },

    /// Runtime update attempted on a flag that is fixed after startup
    #[error("{0} is not a manageable flag")]
    NotManageable(FlagKey),

    /// Address width other than 32 or 64 bits
    #[error("Unsupported address width {0}, expected 32 or 64")]
    AddressWidth(u32),

    /// Failed to read the flags file
    #[error("Failed to read flags file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the flags file
    #[error("Failed to parse flags file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A single value was rejected by its constraint
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// One or more flags were rejected during startup checks
    #[error("{} flag constraint violation(s)", .0.len())]
    Violations(Vec<ConstraintViolation>),
}

/// Result alias for flag operations.
pub type FlagResult<T> = Result<T, FlagError>;
