//! Profile -- options of `split_bins` written in a TOML file.
//!
//! ```toml
//! verbose = 1
//! rewrite_ids = false
//! strict = true
//! keep_open = true
//! summary = "out/summary.json"
//! ```
//! Every field is optional.
use binsplit::SplitConfig;
use definitions::HandlePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    /// 0: warn, 1: info, 2: debug, 3 or more: trace.
    pub verbose: usize,
    pub rewrite_ids: bool,
    pub strict: bool,
    pub keep_open: bool,
    /// The path to the JSON summary.
    pub summary: Option<PathBuf>,
}

impl Profile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = std::fs::read_to_string(path)?;
        toml::from_str(&file)
            .map_err(|why| std::io::Error::new(std::io::ErrorKind::InvalidData, why.to_string()))
    }
    /// Add the flags given in the command line.
    pub fn merge_matches(mut self, matches: &clap::ArgMatches) -> Self {
        self.verbose = self.verbose.max(matches.get_count("verbose") as usize);
        self.rewrite_ids |= matches.get_flag("rewrite_ids");
        self.strict |= matches.get_flag("strict");
        self.keep_open |= matches.get_flag("keep_open");
        if let Some(summary) = matches.get_one::<PathBuf>("summary") {
            self.summary = Some(summary.clone());
        }
        self
    }
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
    pub fn split_config(&self) -> SplitConfig {
        let policy = match self.keep_open {
            true => HandlePolicy::KeepOpen,
            false => HandlePolicy::Reopen,
        };
        SplitConfig::new(self.rewrite_ids, self.strict, policy)
    }
}
