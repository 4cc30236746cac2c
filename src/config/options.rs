// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_OUT_DIR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Named(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub categories: CategorySelector,
    /// Cap on feat pages per run (debugging aid).
    pub limit: Option<usize>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            categories: CategorySelector::All,
            limit: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            pretty: false,
        }
    }
}
