//! Panic hook
//!
//! Server 模式打印彩色详细信息，CLI 模式只打印一行；两种模式都追加写入 crash.log。

use chrono::Utc;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

pub const CRASH_LOG: &str = "crash.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Server,
    Cli,
}

/// One panic, captured for display and the crash log.
pub struct CrashReport {
    pub timestamp: String,
    pub message: String,
    pub location: String,
    pub backtrace: String,
}

impl CrashReport {
    fn capture(panic_info: &panic::PanicHookInfo<'_>) -> Self {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            message,
            location,
            backtrace: format!("{:?}", Backtrace::force_capture()),
        }
    }

    /// Crash-log entry text.
    pub fn render(&self) -> String {
        let rule = "==========================================";
        format!(
            "{rule}\nCrash Report - {}\n{rule}\nMessage: {}\nLocation: {}\n\nBacktrace:\n{}\n{rule}\n\n",
            self.timestamp, self.message, self.location, self.backtrace
        )
    }
}

pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let report = CrashReport::capture(panic_info);

        if let Err(e) = append_crash_log(&report) {
            eprintln!("Failed to write crash log: {}", e);
        }

        match mode {
            RunMode::Server => display_server_panic(&report),
            RunMode::Cli => {
                eprintln!("linkgate panicked: {}", report.message);
                eprintln!("Details saved to {}", CRASH_LOG);
            }
        }
    }));
}

fn display_server_panic(report: &CrashReport) {
    use colored::Colorize;

    let rule = "═══════════════════════════════════════════════════".red().bold();
    eprintln!();
    eprintln!("{}", rule);
    eprintln!("{}", "PANIC".red().bold());
    eprintln!("{}", rule);
    eprintln!("{} {}", "Reason:".yellow().bold(), report.message.white());
    eprintln!("{} {}", "Location:".yellow().bold(), report.location.white());
    eprintln!("{}", "Backtrace:".yellow().bold());
    eprintln!("{}", report.backtrace.dimmed());
    eprintln!("{}", format!("Details saved to {}", CRASH_LOG).cyan());
    eprintln!("{}", rule);
}

fn append_crash_log(report: &CrashReport) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(CRASH_LOG)?;
    file.write_all(report.render().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_fields() {
        let report = CrashReport {
            timestamp: "2026-01-01 00:00:00 UTC".to_string(),
            message: "boom".to_string(),
            location: "src/main.rs:1:1".to_string(),
            backtrace: "<bt>".to_string(),
        };
        let text = report.render();
        assert!(text.contains("Crash Report - 2026-01-01 00:00:00 UTC"));
        assert!(text.contains("Message: boom"));
        assert!(text.contains("Location: src/main.rs:1:1"));
        assert!(text.ends_with("\n\n"));
    }
}
