//! Environment overrides: process env first, then `.env` in the working directory.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Opts;
use crate::utils::config::PackagePaths;

/// Load `.env` from `dir` into the process env. Existing variables win.
pub fn load_dotenv(dir: &Path) {
    let env_path = dir.join(".env");
    if env_path.is_file() {
        match dotenvy::from_path(&env_path) {
            Ok(()) => debug!("Loaded {}", env_path.display()),
            Err(e) => warn!("{}: {}", env_path.display(), e),
        }
    }
}

fn read_var(key: &str) -> Option<String> {
    let name = PackagePaths::get().env_key(key);
    let s = std::env::var(&name).ok()?;
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = read_var(key)?;
    raw.parse()
        .map_err(|_| {
            warn!(
                "{}={:?} is not a valid value; ignoring",
                PackagePaths::get().env_key(key),
                raw
            )
        })
        .ok()
}

/// Apply `FILEGEN_*` variables to opts. Call after the config file and before CLI flags.
pub fn apply_env_to_opts(opts: &mut Opts) {
    if let Some(n) = parse_var("TOTAL_FILES") {
        opts.total_files = n;
    }
    if let Some(n) = parse_var("CONTENT_LENGTH") {
        opts.content_length = n;
    }
    if let Some(p) = read_var("OUTPUT_DIR") {
        opts.output_dir = PathBuf::from(p);
    }
    if let Some(n) = parse_var("WORKERS") {
        opts.num_workers = Some(n);
    }
    if let Some(s) = parse_var("SEED") {
        opts.seed = Some(s);
    }
}
