//! `-XX:` argument parsing
//!
//! Turns `-XX:Name=value`, `-XX:+Name` and `-XX:-Name` into a key and a
//! typed value. No constraint is applied here.

use crate::defaults::{G, K, M, T};
use crate::error::{FlagError, FlagResult};
use crate::flags::{FlagKey, FlagKind, FlagValue};

/// Prefix every collector option carries.
pub const OPTION_PREFIX: &str = "-XX:";

/// A parsed option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedArg {
    /// The flag
    pub key: FlagKey,
    /// The typed value
    pub value: FlagValue,
}

/// Parse one `-XX:` argument.
pub fn parse_arg(arg: &str) -> FlagResult<ParsedArg> {
    let body = arg
        .strip_prefix(OPTION_PREFIX)
        .ok_or_else(|| FlagError::MalformedArgument(arg.to_string()))?;

    if let Some(name) = body.strip_prefix('+') {
        return parse_switch(name, true);
    }
    if let Some(name) = body.strip_prefix('-') {
        return parse_switch(name, false);
    }

    let (name, raw) = body
        .split_once('=')
        .ok_or_else(|| FlagError::MalformedArgument(arg.to_string()))?;
    let key: FlagKey = name.parse()?;
    let value = parse_value(key, raw)?;
    Ok(ParsedArg { key, value })
}

fn parse_switch(name: &str, on: bool) -> FlagResult<ParsedArg> {
    let key: FlagKey = name.parse()?;
    if key.kind() != FlagKind::Bool {
        return Err(FlagError::TypeMismatch {
            flag: key,
            expected: key.kind(),
        });
    }
    Ok(ParsedArg {
        key,
        value: FlagValue::Bool(on),
    })
}

/// Parse the textual value of `key`.
///
/// Integers may be written in hex with a `0x` prefix. Size flags accept a
/// `k`, `m`, `g` or `t` suffix (either case).
pub fn parse_value(key: FlagKey, raw: &str) -> FlagResult<FlagValue> {
    let invalid = || FlagError::InvalidValue {
        name: key.name().to_string(),
        raw: raw.to_string(),
    };

    match key.kind() {
        FlagKind::Bool => match raw {
            "true" => Ok(FlagValue::Bool(true)),
            "false" => Ok(FlagValue::Bool(false)),
            _ => Err(invalid()),
        },
        FlagKind::Intx => {
            let (negative, digits) = match raw.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, raw),
            };
            let magnitude = parse_unsigned(digits).ok_or_else(invalid)?;
            let value = if negative {
                0i64.checked_sub_unsigned(magnitude)
            } else {
                i64::try_from(magnitude).ok()
            };
            value.map(FlagValue::Intx).ok_or_else(invalid)
        }
        FlagKind::Uintx => parse_unsigned(raw).map(FlagValue::Uintx).ok_or_else(invalid),
        FlagKind::Size => parse_size(raw).map(FlagValue::Size).ok_or_else(invalid),
    }
}

fn parse_unsigned(digits: &str) -> Option<u64> {
    let (body, radix) = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (digits, 10),
    };
    // `from_str_radix` accepts a leading `+`
    if body.starts_with('+') {
        return None;
    }
    u64::from_str_radix(body, radix).ok()
}

fn parse_size(raw: &str) -> Option<u64> {
    let (digits, scale) = match raw.as_bytes().last()? {
        b'k' | b'K' => (&raw[..raw.len() - 1], K),
        b'm' | b'M' => (&raw[..raw.len() - 1], M),
        b'g' | b'G' => (&raw[..raw.len() - 1], G),
        b't' | b'T' => (&raw[..raw.len() - 1], T),
        _ => (raw, 1),
    };
    parse_unsigned(digits)?.checked_mul(scale)
}
