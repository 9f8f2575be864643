//! Config layering: defaults < filegen.toml < env / .env < CLI.
//! Process env is global, so every test here holds ENV_LOCK.

use anyhow::Result;
use clap::Parser;
use filegen::engine::{Cli, resolve_opts};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// resolve_opts reads process env (and `.env` writes to it); run these one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("filegen-config-{}-{}", std::process::id(), tag))
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let cli = Cli::try_parse_from(["filegen", "--config", "/definitely/not/here.toml"]).unwrap();
    let err = resolve_opts(&cli, &std::env::temp_dir()).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_unparseable_explicit_config_is_an_error() -> Result<()> {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = scratch_dir("broken");
    fs::create_dir_all(&dir)?;
    let path = dir.join("broken.toml");
    fs::write(&path, "[settings\noutput_dir = \"mine\"\n")?;
    let cli = Cli::try_parse_from(["filegen", "--config", path.to_str().unwrap()])?;
    let err = resolve_opts(&cli, &dir).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_bad_key_in_config_keeps_configured_output_dir() -> Result<()> {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = scratch_dir("bad-key");
    fs::create_dir_all(&dir)?;
    let path = dir.join("custom.toml");
    fs::write(
        &path,
        "[settings]\ntotal_files = 10\noutput_dir = \"mine\"\nworkers = \"many\"\n",
    )?;
    let cli = Cli::try_parse_from(["filegen", "--config", path.to_str().unwrap()])?;
    let opts = resolve_opts(&cli, &dir)?;
    assert_eq!(opts.total_files, 10);
    assert_eq!(opts.output_dir, PathBuf::from("mine"));
    assert_eq!(opts.num_workers, None);
    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_layering_precedence() -> Result<()> {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let cwd = scratch_dir("layers");
    fs::create_dir_all(&cwd)?;
    fs::write(
        cwd.join("filegen.toml"),
        "[settings]\ntotal_files = 7\ncontent_length = 9\nworkers = 2\nprogress = true\noutput_dir = \"from-file\"\n",
    )?;
    fs::write(
        cwd.join(".env"),
        "FILEGEN_CONTENT_LENGTH=11\nFILEGEN_OUTPUT_DIR=from-env\n",
    )?;

    let cli = Cli::try_parse_from(["filegen", "--workers", "5"])?;
    let opts = resolve_opts(&cli, &cwd)?;
    assert_eq!(opts.total_files, 7);
    assert_eq!(opts.content_length, 11);
    assert_eq!(opts.output_dir, PathBuf::from("from-env"));
    assert_eq!(opts.num_workers, Some(5));
    assert!(opts.progress);
    assert!(!opts.verbose);

    let cli = Cli::try_parse_from(["filegen", "-o", "from-cli", "-l", "3", "--seed", "4"])?;
    let opts = resolve_opts(&cli, &cwd)?;
    assert_eq!(opts.output_dir, PathBuf::from("from-cli"));
    assert_eq!(opts.content_length, 3);
    assert_eq!(opts.num_workers, Some(2));
    assert_eq!(opts.seed, Some(4));

    // Unparseable env values are ignored, not fatal.
    unsafe { std::env::set_var("FILEGEN_TOTAL_FILES", "lots") };
    let cli = Cli::try_parse_from(["filegen"])?;
    let opts = resolve_opts(&cli, &cwd)?;
    assert_eq!(opts.total_files, 7);
    unsafe {
        std::env::remove_var("FILEGEN_TOTAL_FILES");
        std::env::remove_var("FILEGEN_CONTENT_LENGTH");
        std::env::remove_var("FILEGEN_OUTPUT_DIR");
    }

    fs::remove_dir_all(&cwd)?;
    Ok(())
}
