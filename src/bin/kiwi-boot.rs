use clap::Parser;
use kiwi_boot::commands::{CommandArgs, KiwiBootArgs, KiwiBootCommand};
use kiwi_boot_utils::logging::Logger;

fn main() {
    let args = KiwiBootArgs::parse();

    Logger::builder()
        .level(args.verbosity.log_level_filter())
        .maybe_log_dir(args.log_out.clone())
        .build()
        .init();

    log::trace!("Parsed arguments: {args:#?}");

    match args.command {
        CommandArgs::Select(mut command) => command.run(),

        CommandArgs::Completions(mut command) => command.run(),
    }
}
