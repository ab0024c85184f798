//! `gcflags alignment`: Print the maximum heap alignment.

use crate::output::Console;
use gcflags_engine::{max_heap_alignment, RegionBounds};
use termcolor::ColorChoice;

pub fn execute(choice: ColorChoice) -> anyhow::Result<()> {
    Console::new(choice).raw(max_heap_alignment(&RegionBounds::default()));
    Ok(())
}
