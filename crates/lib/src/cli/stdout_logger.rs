use std::io::Write;

use log::Log;

/// Logger writing straight to stdout, where solver output also goes.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();

        let _ = writeln!(
            stdout,
            "{level}: {args}",
            level = record.level(),
            args = record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}
