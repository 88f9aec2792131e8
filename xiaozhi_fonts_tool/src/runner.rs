use log::debug;
use std::process::Command;
use xiaozhi_fonts::{command::ExternalCommand, CommandRunner};

/// Runs the rasterizer as a child process, letting it write directly to our stdout and stderr.
pub struct SystemRunner;
impl CommandRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand) -> std::io::Result<Option<i32>> {
        debug!("argv: {:?}", command.args);
        let status = Command::new(&command.program).args(&command.args).status()?;
        Ok(status.code())
    }
}
