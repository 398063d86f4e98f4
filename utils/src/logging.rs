use std::path::{Path, PathBuf};

use bon::Builder;
use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            policy::compound::{
                roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy,
            },
            RollingFileAppender,
        },
    },
    config::{Appender, Root},
    encode::{pattern::PatternEncoder, Encode, Write},
    Config,
};

/// Sets up the `log` backend of the CLI.
///
/// ```no_run
/// use kiwi_boot_utils::logging::Logger;
/// use log::LevelFilter;
///
/// Logger::builder().level(LevelFilter::Debug).build().init();
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Logger {
    #[builder(default = LevelFilter::Info)]
    level: LevelFilter,

    /// Defaults to [`crate::default_log_dir`].
    #[builder(into)]
    log_dir: Option<PathBuf>,
}

impl Logger {
    const TRIGGER_FILE_SIZE: u64 = 10 * 1024;
    const ARCHIVE_FILENAME_PATTERN: &'static str = "kiwi-boot.{}.log";
    const LOG_FILENAME: &'static str = "kiwi-boot.log";
    const LOG_FILE_COUNT: u32 = 4;

    /// Initializes logging for the application.
    ///
    /// Logs go to stderr and to a size-rolled file in the log
    /// directory. If the file appender can't be created, only
    /// stderr is used.
    ///
    /// # Panics
    /// Will panic if logging is unable to be initialized.
    pub fn init(&self) {
        let stderr = ConsoleAppender::builder()
            .encoder(Box::new(LevelEncoder))
            .target(Target::Stderr)
            .tty_only(false)
            .build();

        let mut config =
            Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
        let mut root = Root::builder().appender("stderr");

        match Self::file_appender(&self.log_dir()) {
            Ok(file_appender) => {
                config = config.appender(Appender::builder().build("file", Box::new(file_appender)));
                root = root.appender("file");
            }
            Err(e) => eprintln!("Cannot create logs directory:\n{e}"),
        }

        let config = config
            .build(root.build(self.level))
            .expect("Logger config should build");
        log4rs::init_config(config).expect("Logger should initialize");
    }

    fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(crate::default_log_dir)
    }

    fn file_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
        let roller = FixedWindowRoller::builder().build(
            &format!("{}/{}", log_dir.display(), Self::ARCHIVE_FILENAME_PATTERN),
            Self::LOG_FILE_COUNT,
        )?;

        Ok(RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} - {l} - {m}{n}")))
            .build(
                log_dir.join(Self::LOG_FILENAME),
                Box::new(CompoundPolicy::new(
                    Box::new(SizeTrigger::new(Self::TRIGGER_FILE_SIZE)),
                    Box::new(roller),
                )),
            )?)
    }
}

trait ColoredLevel {
    fn colored(&self) -> ColoredString;
}

impl ColoredLevel for Level {
    fn colored(&self) -> ColoredString {
        match self {
            Self::Error => Self::Error.as_str().red(),
            Self::Warn => Self::Warn.as_str().yellow(),
            Self::Info => Self::Info.as_str().green(),
            Self::Debug => Self::Debug.as_str().blue(),
            Self::Trace => Self::Trace.as_str().cyan(),
        }
    }
}

/// Prefixes console records with their colored level.
#[derive(Debug)]
struct LevelEncoder;

impl Encode for LevelEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        let max_level = log::max_level();
        if max_level == LevelFilter::Off {
            return Ok(());
        }

        writeln!(w, "{} {}", header(record, max_level), record.args())?;
        Ok(())
    }
}

/// The console prefix of `record`. Timestamps are added at debug
/// and the source location at trace.
fn header(record: &Record, max_level: LevelFilter) -> String {
    let level = record.level().colored();
    let sep = "=>".bold();

    match max_level {
        LevelFilter::Off => String::new(),
        LevelFilter::Error | LevelFilter::Warn | LevelFilter::Info => {
            format!("{level:5} {sep}")
        }
        LevelFilter::Debug => format!(
            "[{time} {level:>5}] {sep}",
            time = Local::now().format("%H:%M:%S"),
        ),
        LevelFilter::Trace => format!(
            "[{time} {level:5} {module}:{line}] {sep}",
            time = Local::now().format("%H:%M:%S"),
            module = record.module_path().unwrap_or_default().bright_yellow(),
            line = record
                .line()
                .map_or_else(String::new, |l| l.to_string())
                .bright_green(),
        ),
    }
}
