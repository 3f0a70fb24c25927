//! Logger setup for the CLI.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable that overrides the verbosity flags, in `env_logger` syntax.
pub const LOG_ENV: &str = "TALENTRANK_LOG";

/// Map a verbosity level (see [`TalentrankArgs::verbosity`]) to a log level.
///
/// [`TalentrankArgs::verbosity`]: crate::cli::args::TalentrankArgs::verbosity
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Build the stderr logger. Debug output also names the emitting module.
pub fn builder(verbosity: u8) -> Builder {
    let level = level_for(verbosity);
    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_env(Env::new().filter(LOG_ENV));

    if level >= LevelFilter::Debug {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    }
    builder
}

/// Install the global logger; later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = builder(verbosity).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Error);
        assert_eq!(level_for(1), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Info);
        assert_eq!(level_for(3), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(1);
        init(3);
    }
}
