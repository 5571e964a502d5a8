//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and forwards each formatted line to a sink (e.g. the browser console).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Receives every formatted line that passes the level filter
pub type Sink = fn(Level, &str);

#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Maximum number of lines kept in memory
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: 200,
        }
    }
}

pub struct RollingLogger {
    config: LoggerConfig,
    lines: Mutex<VecDeque<String>>,
    sink: Option<Sink>,
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

impl RollingLogger {
    pub fn new(config: LoggerConfig, sink: Option<Sink>) -> Self {
        Self {
            config,
            lines: Mutex::new(VecDeque::with_capacity(config.capacity)),
            sink,
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn format(record: &Record) -> String {
        format!(
            "{} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn remember(&self, line: String) {
        if self.config.capacity == 0 {
            return;
        }
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.config.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        if let Some(sink) = self.sink {
            sink(record.level(), &line);
        }
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(config: LoggerConfig, sink: Option<Sink>) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config, sink));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("objective")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest_lines() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Debug, capacity: 3 }, None);
        for n in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", n));
        }

        let lines = logger.recent();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("objective: line 2"));
        assert!(lines[2].ends_with("objective: line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Warn, capacity: 10 }, None);
        emit(&logger, Level::Info, "quiet");
        emit(&logger, Level::Error, "loud");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR]"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Trace, capacity: 0 }, None);
        emit(&logger, Level::Info, "gone");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_sink_receives_lines() {
        static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());
        fn sink(level: Level, line: &str) {
            SEEN.lock().unwrap().push(format!("{}|{}", level, line));
        }

        let logger = RollingLogger::new(LoggerConfig::default(), Some(sink));
        emit(&logger, Level::Warn, "saved");

        let seen = SEEN.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("WARN|"));
        assert!(seen[0].ends_with("objective: saved"));
    }
}
