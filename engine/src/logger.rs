use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    tag: Option<String>,
}

impl Logger {
    fn emit(&self, file: &str, line: u32, message: &str) {
        let now = Local::now().format("%H:%M:%S%.3f");
        let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match &self.tag {
            Some(tag) => println!("[{now}][{tag}][{file}:{line}] {message}"),
            None => println!("[{now}][{file}:{line}] {message}"),
        }
    }
}

/// Enables logging for the process. Silent until called, so library users
/// and tests that never opt in see no output.
pub fn init(tag: Option<String>) {
    let _ = LOGGER.set(Logger { tag });
}

pub fn emit(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.emit(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::emit(file!(), line!(), &format!($($arg)*))
    };
}
