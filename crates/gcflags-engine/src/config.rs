//! Flags file and environment options
//!
//! A flags file is TOML:
//!
//! ```toml
//! address_width = 64
//!
//! [flags]
//! UseG1GC = true
//! G1NewSizePercent = 10
//! G1HeapRegionSize = "4m"
//! ```
//!
//! Values loaded from it carry [`FlagOrigin::ConfigFile`](crate::FlagOrigin).

use crate::context::AddressWidth;
use crate::error::{FlagError, FlagResult};
use crate::flags::{FlagKey, FlagKind, FlagValue};
use crate::parse::parse_value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Environment variable holding extra whitespace-separated `-XX:` options.
pub const OPTIONS_ENV: &str = "GCFLAGS_OPTIONS";

/// Parsed flags file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlagsFile {
    /// Target address width in bits (32 or 64)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_width: Option<u32>,

    /// Flag values by command-line name
    #[serde(default)]
    pub flags: BTreeMap<String, toml::Value>,
}

impl FlagsFile {
    /// Load a flags file from disk.
    pub fn from_file(path: &Path) -> FlagResult<Self> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Address width requested by the file, if any.
    pub fn address_width(&self) -> FlagResult<Option<AddressWidth>> {
        self.address_width.map(AddressWidth::from_bits).transpose()
    }

    /// Resolve every entry to a key and typed value.
    pub fn entries(&self) -> FlagResult<Vec<(FlagKey, FlagValue)>> {
        self.flags
            .iter()
            .map(|(name, raw)| {
                let key: FlagKey = name.parse()?;
                Ok((key, convert_value(key, raw)?))
            })
            .collect()
    }
}

impl FromStr for FlagsFile {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn convert_value(key: FlagKey, raw: &toml::Value) -> FlagResult<FlagValue> {
    let invalid = || FlagError::InvalidValue {
        name: key.name().to_string(),
        raw: raw.to_string(),
    };

    match (key.kind(), raw) {
        (FlagKind::Bool, toml::Value::Boolean(b)) => Ok(FlagValue::Bool(*b)),
        (FlagKind::Intx, toml::Value::Integer(i)) => Ok(FlagValue::Intx(*i)),
        (FlagKind::Uintx, toml::Value::Integer(i)) => {
            u64::try_from(*i).map(FlagValue::Uintx).map_err(|_| invalid())
        }
        (FlagKind::Size, toml::Value::Integer(i)) => {
            u64::try_from(*i).map(FlagValue::Size).map_err(|_| invalid())
        }
        // Strings go through the command-line syntax, which allows size suffixes
        (_, toml::Value::String(s)) => parse_value(key, s),
        _ => Err(invalid()),
    }
}

/// Options listed in [`OPTIONS_ENV`], split on whitespace.
pub fn env_args() -> Vec<String> {
    std::env::var(OPTIONS_ENV)
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
