use std::path::PathBuf;

use clap::{crate_authors, crate_version, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::error;

pub mod completions;
pub mod select;

pub trait KiwiBootCommand {
    /// Runs the command and returns a result
    /// of the execution
    ///
    /// # Errors
    /// Can return a `miette` Error
    fn try_run(&mut self) -> miette::Result<()>;

    /// Runs the command and exits if there is an error.
    fn run(&mut self) {
        if let Err(e) = self.try_run() {
            error!("Failed:\n{e:?}");
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "kiwi-boot",
    about,
    long_about = None,
    author = crate_authors!(),
    version = crate_version!(),
)]
pub struct KiwiBootArgs {
    #[command(subcommand)]
    pub command: CommandArgs,

    #[clap(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// The directory to write logs to.
    ///
    /// Defaults to the user's cache directory.
    #[arg(long, global = true)]
    pub log_out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CommandArgs {
    /// Select the boot image builder for an appliance build
    ///
    /// The initrd system is read from the chosen build type
    /// of the appliance description. Builds that don't declare
    /// one use the `kiwi` initrd system.
    Select(select::SelectCommand),

    /// Generate shell completions for your shell to stdout
    Completions(completions::CompletionsCommand),
}

#[cfg(test)]
mod test {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{CommandArgs, KiwiBootArgs};

    #[test]
    fn verify_cli() {
        KiwiBootArgs::command().debug_assert();
    }

    #[test]
    fn parse_select() {
        let args = KiwiBootArgs::try_parse_from([
            "kiwi-boot",
            "select",
            "appliance.yml",
            "--target-dir",
            "/tmp/target",
            "--signing-key",
            "first.asc",
            "-k",
            "second.asc,third.asc",
            "--log-out",
            "/tmp/logs",
        ])
        .unwrap();

        assert_eq!(args.log_out.as_deref(), Some(std::path::Path::new("/tmp/logs")));
        assert!(matches!(args.command, CommandArgs::Select(_)));
    }

    #[test]
    fn select_requires_target_dir() {
        assert!(KiwiBootArgs::try_parse_from(["kiwi-boot", "select", "appliance.yml"]).is_err());
    }
}
