//! `gcflags list`: Print the flag table.

use crate::output::Console;
use gcflags_engine::flags::FLAGS;
use termcolor::ColorChoice;

pub fn execute(choice: ColorChoice) -> anyhow::Result<()> {
    let mut console = Console::new(choice);
    console.flag_header();
    for descriptor in FLAGS.iter() {
        console.flag_row(descriptor);
    }
    Ok(())
}
