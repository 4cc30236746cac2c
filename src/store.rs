// src/store.rs
//
// One JSON file per feat, grouped in per-category directories:
// results/feats/<Category>/<Feat Name>.json

use std::{error::Error, fs, path::{Path, PathBuf}};

use crate::core::sanitize::sanitize_filename;
use crate::model::FeatRecord;

pub fn save_feat(
    record: &FeatRecord,
    out_dir: &Path,
    pretty: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    let dir = out_dir.join(&record.feat_type);
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{}.json", sanitize_filename(&record.name)));
    let contents = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    fs::write(&path, contents)?;
    Ok(path)
}
