//! Load `filegen.toml` (CLI only). Lib does not use this; the consuming program injects config via GenOpts.
//!
//! Keys under `[settings]` are read one at a time: a bad value or unknown key is warned about and
//! skipped, the rest of the file still applies. A file that is not valid TOML at all is an error.

use anyhow::{Context, Result};
use log::warn;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

use crate::Opts;

const SETTINGS: &str = "settings";

const KNOWN_KEYS: &[&str] = &[
    "total_files",
    "content_length",
    "output_dir",
    "workers",
    "seed",
    "progress",
];

#[derive(Debug, Default)]
pub(crate) struct FilegenToml {
    settings: GenerateSection,
}

#[derive(Debug, Default)]
struct GenerateSection {
    total_files: Option<usize>,
    content_length: Option<usize>,
    output_dir: Option<String>,
    workers: Option<usize>,
    seed: Option<u64>,
    progress: Option<bool>,
}

/// Convert `settings.<key>`; None when absent or (with a warning) when it has the wrong type.
fn field<T: DeserializeOwned>(sec: &Table, key: &str, origin: &Path) -> Option<T> {
    let v = sec.get(key)?;
    v.clone()
        .try_into()
        .map_err(|e| {
            warn!(
                "{}: {}.{} = {} ignored: {}",
                origin.display(),
                SETTINGS,
                key,
                v,
                e.message()
            )
        })
        .ok()
}

/// Parse config text. Errors only when the text is not TOML; per-key problems are warnings.
pub(crate) fn parse_filegen_toml(s: &str, origin: &Path) -> Result<FilegenToml> {
    let doc: Table = toml::from_str(s).with_context(|| format!("parse {}", origin.display()))?;

    for key in doc.keys().filter(|k| k.as_str() != SETTINGS) {
        warn!("{}: unknown table or key `{}` ignored", origin.display(), key);
    }
    let sec = match doc.get(SETTINGS) {
        None => return Ok(FilegenToml::default()),
        Some(Value::Table(t)) => t,
        Some(_) => {
            warn!("{}: `{}` is not a table; ignored", origin.display(), SETTINGS);
            return Ok(FilegenToml::default());
        }
    };
    for key in sec.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        warn!("{}: unknown key {}.{} ignored", origin.display(), SETTINGS, key);
    }

    Ok(FilegenToml {
        settings: GenerateSection {
            total_files: field(sec, "total_files", origin),
            content_length: field(sec, "content_length", origin),
            output_dir: field(sec, "output_dir", origin),
            workers: field(sec, "workers", origin),
            seed: field(sec, "seed", origin),
            progress: field(sec, "progress", origin),
        },
    })
}

/// Load the config file at `path`. Ok(None) when the file does not exist; read or syntax errors
/// are returned so a run never falls back to defaults behind the user's back.
pub(crate) fn load_filegen_toml(path: &Path) -> Result<Option<FilegenToml>> {
    if !path.is_file() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_filegen_toml(&s, path).map(Some)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only set fields present in the file). Call before env and CLI.
/// `verbose` is never in the file: logging is set up before the file is read.
pub(crate) fn apply_file_to_opts(file: &FilegenToml, opts: &mut Opts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, total_files => total_files);
    apply_file_opt!(sec, opts, content_length => content_length);
    if let Some(ref p) = sec.output_dir {
        opts.output_dir = PathBuf::from(p);
    }
    if let Some(n) = sec.workers {
        opts.num_workers = Some(n);
    }
    if let Some(s) = sec.seed {
        opts.seed = Some(s);
    }
    apply_file_opt!(sec, opts, progress => progress);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> PathBuf {
        PathBuf::from("filegen.toml")
    }

    fn applied(s: &str) -> Opts {
        let file = parse_filegen_toml(s, &origin()).unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        opts
    }

    #[test]
    fn partial_file_only_touches_present_fields() {
        let opts = applied("[settings]\ntotal_files = 12\noutput_dir = \"out\"\n");
        assert_eq!(opts.total_files, 12);
        assert_eq!(opts.output_dir, PathBuf::from("out"));
        assert_eq!(opts.content_length, 5000);
        assert_eq!(opts.num_workers, None);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn workers_and_seed_are_wrapped() {
        let opts = applied("[settings]\nworkers = 3\nseed = 42\n");
        assert_eq!(opts.num_workers, Some(3));
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn empty_file_is_valid() {
        assert_eq!(applied("").total_files, 3000);
    }

    #[test]
    fn bad_value_skips_only_that_key() {
        let opts = applied(
            "[settings]\ntotal_files = 10\noutput_dir = \"mine\"\ncontent_length = \"big\"\n",
        );
        assert_eq!(opts.total_files, 10);
        assert_eq!(opts.output_dir, PathBuf::from("mine"));
        assert_eq!(opts.content_length, 5000);
    }

    #[test]
    fn negative_count_skips_only_that_key() {
        let opts = applied("[settings]\nworkers = -2\noutput_dir = \"mine\"\n");
        assert_eq!(opts.num_workers, None);
        assert_eq!(opts.output_dir, PathBuf::from("mine"));
    }

    #[test]
    fn unknown_key_is_ignored_and_neighbours_apply() {
        let opts = applied("[settings]\ntotal = 1\ntotal_files = 8\n\n[extra]\nx = 1\n");
        assert_eq!(opts.total_files, 8);
    }

    #[test]
    fn settings_not_a_table_is_ignored() {
        assert_eq!(applied("settings = 5\n").total_files, 3000);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_filegen_toml("[settings\ntotal_files = 1\n", &origin()).is_err());
    }

    #[test]
    fn missing_file_is_none() {
        let path = std::env::temp_dir().join("filegen-no-such-config.toml");
        assert!(load_filegen_toml(&path).unwrap().is_none());
    }
}
