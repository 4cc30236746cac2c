// src/config/consts.rs

// Net config
pub const FEATS_INDEX: &str = "https://www.d20pfsrd.com/feats";

// Relative hrefs on category tables resolve against this
pub const FEATS_BASE: &str = "https://www.d20pfsrd.com/feats/";

// Output
pub const DEFAULT_OUT_DIR: &str = "results/feats";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
