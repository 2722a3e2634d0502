mod pdf;
mod theme;

pub use pdf::render_to_bytes;
pub use theme::Theme;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::audit::AuditRecord;
use crate::config::Config;

/// Build the report file name: `audit_{slug}_{yyyymmdd}.pdf`.
pub fn report_filename(business_name: &str, date_stamp: &str) -> String {
    let slug = business_name
        .trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('/', "-");
    format!("audit_{slug}_{date_stamp}.pdf")
}

/// Where reports land by default: configured directory first, the user's
/// Desktop when it exists, the working directory otherwise.
pub fn default_output_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.output_dir {
        return dir.clone();
    }
    if let Some(desktop) = dirs::desktop_dir() {
        if desktop.exists() {
            return desktop;
        }
    }
    PathBuf::from(".")
}

/// Full output path for a record, stamped with today's date.
pub fn output_path(record: &AuditRecord, dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d").to_string();
    dir.join(report_filename(&record.business_name, &stamp))
}

/// Render the record and write the PDF to `path`.
pub fn render_to_file(record: &AuditRecord, path: &Path) -> Result<()> {
    let bytes = render_to_bytes(record)?;
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_slug() {
        assert_eq!(
            report_filename("Joe's Garage", "20260807"),
            "audit_joe's_garage_20260807.pdf"
        );
    }

    #[test]
    fn test_filename_replaces_slashes() {
        assert_eq!(
            report_filename("A/B Towing", "20260807"),
            "audit_a-b_towing_20260807.pdf"
        );
    }

    #[test]
    fn test_filename_trims_and_lowercases() {
        assert_eq!(
            report_filename("  BIG Shop  ", "20260101"),
            "audit_big_shop_20260101.pdf"
        );
    }

    #[test]
    fn test_configured_output_dir_wins() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/reports")),
            ..Default::default()
        };
        assert_eq!(default_output_dir(&config), PathBuf::from("/tmp/reports"));
    }
}
