//! Diagnostics for the terminal. stdout carries generated code, so every
//! message here goes to stderr.

use colored::Colorize;

pub fn status_message(message: &str) {
    eprintln!("{} {} ... ", "⏳".yellow(), message.bright_white());
}

pub fn success_message(message: &str) {
    eprintln!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    eprintln!("{} {}", "⚠️ ".yellow(), message.yellow());
}

pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}

pub fn info_message(message: &str) {
    eprintln!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// One `label: value` line of a summary block
pub fn summary_line(label: &str, value: usize) {
    eprintln!("  {:<24} {}", format!("{label}:").cyan(), value);
}
