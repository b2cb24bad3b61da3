//! Config schema and deserialization

use crate::analyzer::signals::{KeywordCategory, KeywordLists};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
/// 25 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
pub const DEFAULT_FILE_PATTERNS: [&str; 3] = [".txt", ".md", ".text"];

/// Extra keyword phrases appended to the built-in lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsConfig {
    #[serde(default)]
    pub absolute_claims: Vec<String>,
    #[serde(default)]
    pub sensitive: Vec<String>,
    #[serde(default)]
    pub privacy: Vec<String>,
}

impl KeywordsConfig {
    fn merge_from(&mut self, base: KeywordsConfig) {
        union_into(&mut self.absolute_claims, base.absolute_claims);
        union_into(&mut self.sensitive, base.sensitive);
        union_into(&mut self.privacy, base.privacy);
    }
}

/// HTTP server settings (all optional; accessors apply the defaults)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Directory holding index.html and other static assets
    #[serde(default)]
    pub static_dir: Option<String>,
    /// Request body limit for uploads
    #[serde(default)]
    pub max_upload_bytes: Option<usize>,
    /// CORS origins; empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    fn merge_from(&mut self, base: ServerConfig) {
        self.host = self.host.take().or(base.host);
        self.port = self.port.or(base.port);
        self.static_dir = self.static_dir.take().or(base.static_dir);
        self.max_upload_bytes = self.max_upload_bytes.or(base.max_upload_bytes);
        union_into(&mut self.allowed_origins, base.allowed_origins);
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn static_dir(&self) -> &Path {
        Path::new(self.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR))
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

/// Root config structure for .mediascorerc.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum score threshold (CLI exits 1 if any score is below). Default: none
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Extra keyword phrases per category
    #[serde(default)]
    pub keywords: KeywordsConfig,

    /// Glob patterns for files/directories to skip when walking a directory
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File name suffixes treated as message copy (default: .txt, .md, .text)
    #[serde(default)]
    pub file_patterns: Vec<String>,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Merge a base config into this one. Values in `self` take precedence; lists are unioned.
    pub fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        self.keywords.merge_from(base.keywords);
        union_into(&mut self.ignore, base.ignore);
        union_into(&mut self.file_patterns, base.file_patterns);
        self.server.merge_from(base.server);
    }

    /// Built-in keyword lists plus the configured extras
    pub fn keyword_lists(&self) -> KeywordLists {
        KeywordLists::builtin()
            .with_extra(KeywordCategory::AbsoluteClaims, &self.keywords.absolute_claims)
            .with_extra(KeywordCategory::SensitiveDomain, &self.keywords.sensitive)
            .with_extra(KeywordCategory::Privacy, &self.keywords.privacy)
    }

    /// File suffixes to evaluate when walking directories
    pub fn get_file_patterns(&self) -> Vec<&str> {
        if self.file_patterns.is_empty() {
            DEFAULT_FILE_PATTERNS.to_vec()
        } else {
            self.file_patterns.iter().map(|s| s.as_str()).collect()
        }
    }
}

fn union_into(target: &mut Vec<String>, base: Vec<String>) {
    for item in base {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
