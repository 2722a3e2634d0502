use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use super::Prompter;

/// Interactive prompter over stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Read one trimmed line. Returns None when the input stream is closed.
    fn read_line(&self) -> Result<Option<String>> {
        io::stdout().flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let suffix = match default {
            Some(d) if !d.is_empty() => format!(" [{d}]"),
            _ => String::new(),
        };
        print!("  {label}{suffix}: ");
        let Some(val) = self.read_line()? else {
            bail!("Input stream closed while waiting for '{label}'");
        };
        if val.is_empty() {
            Ok(default.unwrap_or("").to_string())
        } else {
            Ok(val)
        }
    }

    fn ask_choice(&mut self, label: &str, options: &[&str]) -> Result<usize> {
        println!("\n  {label}");
        for (i, option) in options.iter().enumerate() {
            println!("    {}. {}", i + 1, option);
        }
        loop {
            print!("    Enter number: ");
            let Some(val) = self.read_line()? else {
                bail!("Input stream closed while waiting for '{label}'");
            };
            if let Ok(n) = val.parse::<usize>() {
                if n >= 1 && n <= options.len() {
                    return Ok(n);
                }
            }
            println!("    Invalid. Try again.");
        }
    }

    fn ask_lines(&mut self, prompt: &str) -> Result<Vec<String>> {
        println!("{prompt}");
        let mut lines = Vec::new();
        loop {
            print!("  > ");
            // Stream closure ends the list the same way a blank line does
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }
}
