use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config as LogConfig,
};

use crate::config::Config;
use crate::error::{Error, Result};

/// Pattern used when no log4rs configuration file is present.
pub const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Set up the global logger, from the configured log4rs file if it exists,
/// otherwise with a console logger at `info`.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_config();
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| Error::Logging(format!("{}: {e}", path.display())))?;
    } else {
        log4rs::init_config(console_config()?).map_err(|e| Error::Logging(e.to_string()))?;
    }
    Ok(())
}

/// The fallback configuration: everything at `info` and above to stdout.
fn console_config() -> Result<LogConfig> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
        .build();
    LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| Error::Logging(e.to_string()))
}
