//! `gcflags check`: Run the startup validation pipeline.

use crate::output::Console;
use anyhow::Context;
use gcflags_engine::config::env_args;
use gcflags_engine::{
    AddressWidth, ConstraintRegistry, FlagContext, FlagError, FlagOrigin, FlagStore, FlagsFile,
    StderrSink,
};
use std::path::PathBuf;
use std::sync::Arc;
use termcolor::ColorChoice;

/// Options for `gcflags check`.
pub struct CheckOptions {
    pub config: Option<PathBuf>,
    pub address_width: Option<u32>,
    pub quiet: bool,
    pub args: Vec<String>,
}

/// Returns `Ok(false)` when any flag is rejected.
pub fn execute(options: &CheckOptions, choice: ColorChoice) -> anyhow::Result<bool> {
    let file = match &options.config {
        Some(path) => Some(
            FlagsFile::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };

    let registry = ConstraintRegistry::with_defaults().with_sink(Arc::new(StderrSink::new(choice)));
    let store = FlagStore::new(FlagContext::new(), registry);

    if let Some(file) = &file {
        store.apply_file(file)?;
    }
    for arg in env_args() {
        store.apply_arg(&arg, FlagOrigin::EnvironmentVariable)?;
    }
    for arg in &options.args {
        store.apply_arg(arg, FlagOrigin::CommandLine)?;
    }

    // The command-line width wins over the flags file
    if let Some(bits) = options.address_width {
        store.set_address_width(AddressWidth::from_bits(bits)?);
    }
    let width = store.snapshot().address_width();

    let mut console = Console::new(choice);

    match store.startup(!options.quiet) {
        Ok(report) => {
            console.accepted(width);
            if !options.quiet {
                for &(key, value) in &report.ergonomic {
                    console.ergonomic(key, value);
                }
            }
            Ok(true)
        }
        Err(FlagError::Violations(violations)) => {
            console.rejected(violations.len());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
