use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::LevelFilter;
use log::Level;
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use once_cell::sync::OnceCell;
use thiserror::Error;

static INSTANCE: OnceCell<Logger> = OnceCell::new();

/// Environment variable used to override the command line verbosity (e.g. `HEREDITY_LOG=debug`)
pub const LOG_ENV_VAR: &str = "HEREDITY_LOG";

const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] {msg:<24} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to wrap logger with multiprogress")]
    WrapLogger(#[from] log::SetLoggerError),

    #[error("Logger was already initialized")]
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {

    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default()
            .filter(LOG_ENV_VAR);

        let logger = Builder::new().filter_level(log_level)
            .format(|buf, record| {

                let (traceback, set_intensity) = if record.level() == Level::Error {
                    (format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)), true)
                } else {
                    (String::new(), false)
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .build();

        // Progress bar support.
        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger).try_init()?;
        INSTANCE.set(Self{multi_pg}).map_err(|_| LoggerError::AlreadyInitialized)
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// Access the shared `MultiProgress`. `None` if the logger was never initialized (e.g. library use, tests).
    pub fn multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }

    /// Create a progress bar of length `len`, drawn alongside log records.
    /// The bar is hidden whenever the logger is not initialized, or when logging is restricted to errors.
    pub fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
        let Some(multi) = Self::multi().filter(|_| log::max_level() > LevelFilter::Error) else {
            return ProgressBar::hidden()
        };
        let pb = multi.add(ProgressBar::new(len));
        if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            pb.set_style(style.progress_chars("=> "));
        }
        pb.set_message(message);
        pb
    }
}
