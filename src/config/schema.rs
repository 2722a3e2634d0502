use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audit tool configuration.
///
/// Every field is optional: the tool is designed to run with no config file
/// at all, in which case the defaults below apply.
///
/// Example YAML:
/// ```yaml
/// auditor_name: "Queso Ventures"
/// pagespeed_api_key: "AIza..."
/// output_dir: "/home/me/audits"
/// site_timeout_secs: 8
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name printed in the report footer and offered as the prompt default
    #[serde(default)]
    pub auditor_name: Option<String>,

    /// PageSpeed Insights API key. Takes precedence over the PAGESPEED_KEY
    /// environment variable. When neither is set the key parameter is
    /// omitted and the API is queried unauthenticated.
    #[serde(default)]
    pub pagespeed_api_key: Option<String>,

    /// Directory the report is written to. When unset, the user's Desktop
    /// is used if it exists, else the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Timeout for the website reachability fetch (default: 8)
    #[serde(default)]
    pub site_timeout_secs: Option<u64>,

    /// Timeout for the search-results listing fetch (default: 10)
    #[serde(default)]
    pub search_timeout_secs: Option<u64>,

    /// Timeout for the PageSpeed API call (default: 20)
    #[serde(default)]
    pub pagespeed_timeout_secs: Option<u64>,
}

impl Config {
    pub fn site_timeout_secs(&self) -> u64 {
        self.site_timeout_secs.unwrap_or(8)
    }

    pub fn search_timeout_secs(&self) -> u64 {
        self.search_timeout_secs.unwrap_or(10)
    }

    pub fn pagespeed_timeout_secs(&self) -> u64 {
        self.pagespeed_timeout_secs.unwrap_or(20)
    }

    /// Resolve the PageSpeed API key: config value first, then the
    /// PAGESPEED_KEY environment variable. None means "query without a key".
    pub fn resolve_pagespeed_key(&self) -> Option<String> {
        if let Some(ref key) = self.pagespeed_api_key {
            let trimmed = key.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        match std::env::var(crate::config::ENV_PAGESPEED_KEY) {
            Ok(val) => {
                let trimmed = val.trim().to_string();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            }
            Err(_) => None,
        }
    }
}
