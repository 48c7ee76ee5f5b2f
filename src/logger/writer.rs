//! Log sink module
//!
//! Routes log lines to the console or to append-mode files. The sink is
//! process-global and set up once at startup; before that, callers fall back
//! to plain stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static LOG_SINK: OnceLock<LogSink> = OnceLock::new();

/// Process-global log sink with separate access and error channels.
///
/// A channel is either a file (mutex-guarded, since request tasks log
/// concurrently) or the console.
pub struct LogSink {
    access_file: Option<Mutex<File>>,
    error_file: Option<Mutex<File>>,
}

impl LogSink {
    pub fn write_access(&self, line: &str) {
        emit(self.access_file.as_ref(), line, false);
    }

    pub fn write_info(&self, line: &str) {
        emit(self.access_file.as_ref(), line, false);
    }

    pub fn write_error(&self, line: &str) {
        emit(self.error_file.as_ref(), line, true);
    }
}

fn emit(file: Option<&Mutex<File>>, line: &str, console_is_stderr: bool) {
    match file {
        Some(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
        None if console_is_stderr => eprintln!("{line}"),
        None => println!("{line}"),
    }
}

fn open_append(path: &str) -> io::Result<Mutex<File>> {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)?,
        _ => {}
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Mutex::new(file))
}

/// Set up the global sink. Errors if a log file cannot be opened or if the
/// sink was already initialized.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let sink = LogSink {
        access_file: access_log_file.map(open_append).transpose()?,
        error_file: error_log_file.map(open_append).transpose()?,
    };

    LOG_SINK.set(sink).map_err(|_| {
        io::Error::new(io::ErrorKind::AlreadyExists, "Log sink already initialized")
    })
}

/// The global sink, if initialized
pub fn get() -> Option<&'static LogSink> {
    LOG_SINK.get()
}
