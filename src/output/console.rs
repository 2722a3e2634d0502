use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

/// The interview layout was designed for a 55-column band; wider terminals
/// keep the band width, narrower ones shrink to fit.
const BAND_WIDTH: usize = 55;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn band_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| (w as usize).min(BAND_WIDTH))
        .unwrap_or(BAND_WIDTH)
}

/// Double-rule banner with an indented title line
pub fn format_banner(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    format!("{rule}\n  {title}\n{rule}")
}

/// Section divider: `──── TITLE ────`, or a plain rule when untitled
pub fn format_divider(title: &str, width: usize) -> String {
    if title.is_empty() {
        return "\u{2500}".repeat(width);
    }
    let pad = width.saturating_sub(title.chars().count() + 2) / 2;
    let rule = "\u{2500}".repeat(pad);
    format!("{rule} {title} {rule}")
}

/// `  ✓ label` / `  ✗ label` status line
pub fn format_status(ok: bool, label: &str, use_colors: bool) -> String {
    if use_colors {
        if ok {
            format!("  {} {}", "\u{2713}".green(), label)
        } else {
            format!("  {} {}", "\u{2717}".red(), label)
        }
    } else if ok {
        format!("  \u{2713} {label}")
    } else {
        format!("  \u{2717} {label}")
    }
}

pub fn print_banner(title: &str) {
    println!("\n{}", format_banner(title, band_width()));
}

pub fn print_divider(title: &str) {
    println!("\n{}", format_divider(title, band_width()));
}

pub fn print_status(ok: bool, label: &str) {
    println!("{}", format_status(ok, label, should_use_colors()));
}
