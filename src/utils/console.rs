use chrono::Local;

use crate::domain::ports::MessageSink;

/// Writes timestamped status lines to the console, the way the desktop tool
/// wrote into its dialog window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for Console {
    fn message(&self, text: &str) {
        let stamp = Local::now().format("%m-%d-%Y %H:%M:%S");
        println!("{} : {}", stamp, text);
        tracing::debug!("{}", text);
    }

    fn error(&self, text: &str) {
        let stamp = Local::now().format("%m-%d-%Y %H:%M:%S");
        eprintln!("{} : {}", stamp, text);
        tracing::error!("{}", text);
    }
}
