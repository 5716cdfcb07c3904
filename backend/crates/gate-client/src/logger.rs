use std::fmt;
use std::time::SystemTime;

use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};

/// Send diagnostics to stderr so stdout stays machine-readable
pub fn initialize(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .level(level)
        .format(stderr_format)
        .chain(std::io::stderr())
        .apply()
}

fn stderr_format(out: FormatCallback, message: &fmt::Arguments, record: &Record) {
    out.finish(format_args!("{}", render_line(message, record)))
}

pub(crate) fn render_line(message: &fmt::Arguments, record: &Record) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}
