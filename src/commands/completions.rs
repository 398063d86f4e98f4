use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use log::debug;

use crate::commands::KiwiBootArgs;

use super::KiwiBootCommand;

#[derive(Debug, Clone, Args)]
pub struct CompletionsCommand {
    #[arg(value_enum)]
    shell: Shell,
}

impl KiwiBootCommand for CompletionsCommand {
    fn try_run(&mut self) -> miette::Result<()> {
        debug!("Generating completions for {shell}", shell = self.shell);

        generate(
            self.shell,
            &mut KiwiBootArgs::command(),
            "kiwi-boot",
            &mut std::io::stdout().lock(),
        );

        Ok(())
    }
}
