//! Filesystem helpers for the output directory.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::WorkItem;

/// Target path for `item` inside `dir`.
pub fn file_path_for(dir: &Path, item: &WorkItem) -> PathBuf {
    dir.join(&item.file_name)
}

/// Remove `dir` recursively (a missing dir is fine) and create it again, parents included.
/// Any other failure is fatal: generation must not start against a half-prepared directory.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => debug!("Removed previous output at {}", dir.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("clear output directory {}", dir.display()));
        }
    }
    fs::create_dir_all(dir).with_context(|| format!("create output directory {}", dir.display()))
}
