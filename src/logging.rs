use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Compact `HH:MM:SS [L] message` lines, coloured by level.
pub fn format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> std::io::Result<()> {
    let style = flexi_logger::style(record.level());
    write!(
        w,
        "{} {pref}[{}] {}{suf}",
        now.format("%H:%M:%S"),
        &record.level().as_str()[0..1],
        record.args(),
        pref = style.prefix(),
        suf = style.suffix(),
    )
}

fn builder(default_spec: &str) -> Result<Logger, FlexiLoggerError> {
    Ok(Logger::try_with_env_or_str(default_spec)?
        .set_palette("196;208;3;7;8".to_owned())
        .format(format))
}

/// Logger for tests and benches, honouring `RUST_LOG`. Output goes through the test harness capture.
pub fn start_captured(default_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    builder(default_spec)?
        .write_mode(WriteMode::SupportCapture)
        .log_to_stdout()
        .start()
}

/// Logger for binaries, honouring `RUST_LOG`. Writes to stderr so stdout stays clean.
pub fn start_stderr(default_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    builder(default_spec)?.log_to_stderr().start()
}
