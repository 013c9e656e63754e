use colored::Colorize;
use std::fmt;

use crate::analytics::ReportLine;

pub fn section(title: impl fmt::Display) {
    let heading = format!("=== {} ===", title.to_string().trim());
    println!("{}", heading.bold());
}

/// Report rows stay uncoloured so they can be piped and diffed.
pub fn report_line(line: &ReportLine) {
    println!("{line}");
}

pub fn plain(message: impl fmt::Display) {
    println!("{message}");
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
