use clap::Parser;
use std::path::PathBuf;

use presence_audit::audit::collect_audit;
use presence_audit::prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
use presence_audit::web::HttpLookup;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INTERVIEW: i32 = 1;
const EXIT_REPORT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "presence-audit")]
#[command(about = "Interactive SEO/GEO audit generator for local businesses", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/presence-audit/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Run non-interactively from a YAML list of prompt answers
    #[arg(long)]
    answers: Option<String>,

    /// Directory to write the report into (overrides config and Desktop)
    #[arg(short, long)]
    output: Option<String>,

    /// Open the finished report with the system default viewer
    #[arg(long)]
    open: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Load config (all fields optional; a missing default file is fine)
    let config_path = cli.config.map(PathBuf::from);
    let config = match presence_audit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e:#}");
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Auditor default: {}",
            config.auditor_name.as_deref().unwrap_or("(built-in)")
        );
        eprintln!(
            "PageSpeed key: {}",
            if config.resolve_pagespeed_key().is_some() {
                "configured"
            } else {
                "not set (unauthenticated quota)"
            }
        );
    }

    // The interview runs against either the real terminal or a recorded
    // answer file; both are the same capability to the collection code.
    let mut prompter: Box<dyn Prompter> = match cli.answers {
        Some(ref path) => match ScriptedPrompter::from_file(PathBuf::from(path).as_path()) {
            Ok(p) => {
                if cli.verbose {
                    eprintln!("Replaying {} answers from {}", p.remaining(), path);
                }
                Box::new(p)
            }
            Err(e) => {
                eprintln!("Answers error: {e:#}");
                std::process::exit(EXIT_CONFIG);
            }
        },
        None => Box::new(TerminalPrompter::new()),
    };

    let lookup = match HttpLookup::new(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to set up HTTP client: {e:#}");
            std::process::exit(EXIT_REPORT);
        }
    };

    let record = match collect_audit(prompter.as_mut(), &lookup, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Interview aborted: {e:#}");
            std::process::exit(EXIT_INTERVIEW);
        }
    };

    let output_dir = cli
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| presence_audit::report::default_output_dir(&config));
    let path = presence_audit::report::output_path(&record, &output_dir);

    println!("\n  Generating PDF...");
    if let Err(e) = presence_audit::report::render_to_file(&record, &path) {
        eprintln!("Report error: {e:#}");
        std::process::exit(EXIT_REPORT);
    }
    println!("\n  Saved to: {}\n", path.display());

    if cli.open {
        // Best effort; the report is already on disk
        if let Err(e) = presence_audit::browser::open_report(&path) {
            eprintln!("Could not open report: {e:#}");
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
