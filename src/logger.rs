//! Custom logging module.
//!
//! This module provides a `log` implementation that formats entries and hands
//! them to a callback, which the application uses to feed the log pane.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{mpsc, Arc, Mutex};

pub type LogSender = mpsc::Sender<String>;
pub type LogReceiver = mpsc::Receiver<String>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Logger that forwards formatted entries to a callback
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && !metadata.target().starts_with("hyper")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the logger globally and return the receiving end of the entries
/// it produces.
///
pub fn init(level: LevelFilter) -> AppResult<LogReceiver> {
    let (tx, rx) = mpsc::channel::<String>();
    let logger = CustomLogger::new(level);
    let sender = Mutex::new(tx);
    logger.set_log_callback(Box::new(move |entry| {
        if let Ok(sender) = sender.lock() {
            let _ = sender.send(entry);
        }
    }));
    log::set_logger(Box::leak(Box::new(logger))).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_contains_level_and_message() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("hello {}", 42))
                .level(Level::Warn)
                .build(),
        );
        assert!(line.contains("WARN"));
        assert!(line.ends_with("hello 42"));
    }

    #[test]
    fn callback_receives_enabled_entries_only() {
        let logger = CustomLogger::new(LevelFilter::Info);
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        logger.set_log_callback(Box::new(move |entry| sink.lock().unwrap().push(entry)));

        logger.log(&Record::builder().args(format_args!("kept")).level(Level::Info).build());
        logger.log(&Record::builder().args(format_args!("dropped")).level(Level::Debug).build());

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert!(captured[0].ends_with("kept"));
    }

    #[test]
    fn init_installs_global_logger_once() {
        let rx = init(LevelFilter::Info).unwrap();
        log::info!(target: "form_manager_tui::logger", "logger installed");
        let forwarded = rx
            .try_iter()
            .any(|entry| entry.ends_with("logger installed"));
        assert!(forwarded);

        assert!(matches!(init(LevelFilter::Info), Err(AppError::Logger(_))));
    }
}
