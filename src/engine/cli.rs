//! CLI command handler: layer config, generate, report.

use anyhow::{Result, bail};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::generate::generate_with_progress;
use crate::utils::config::PackagePaths;
use crate::utils::filegen_toml::{apply_file_to_opts, load_filegen_toml};
use crate::utils::{apply_env_to_opts, load_dotenv, setup_logging};

/// Overwrite opts field from CLI when the flag was given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $cli_field:ident => $opts_field:ident) => {
        if let Some(v) = $cli.$cli_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Build Opts: defaults < config file < env (and `.env`) < CLI flags.
pub fn resolve_opts(cli: &Cli, cwd: &Path) -> Result<Opts> {
    let mut opts = Opts::default();

    let config_path = match &cli.config {
        Some(p) => {
            if !p.is_file() {
                bail!("config file {} not found", p.display());
            }
            p.clone()
        }
        None => cwd.join(PackagePaths::get().config_filename()),
    };
    if let Some(file) = load_filegen_toml(&config_path)? {
        debug!("Using config {}", config_path.display());
        apply_file_to_opts(&file, &mut opts);
    }

    load_dotenv(cwd);
    apply_env_to_opts(&mut opts);

    apply_cli_opt!(cli, opts, total_files => total_files);
    apply_cli_opt!(cli, opts, content_length => content_length);
    apply_cli_opt!(cli, opts, output_dir => output_dir);
    if let Some(n) = cli.workers {
        opts.num_workers = Some(n);
    }
    if let Some(s) = cli.seed {
        opts.seed = Some(s);
    }
    apply_cli_opt!(cli, opts, progress => progress);
    apply_cli_opt!(cli, opts, verbose => verbose);
    Ok(opts)
}

/// Generate the files and report. Individual write failures are logged and counted, never fatal.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose.unwrap_or(false));
    let opts = resolve_opts(cli, &std::env::current_dir()?)?;
    debug!(
        "{} CONFIG:{:#?}",
        PackagePaths::get().pkg_name().to_uppercase(),
        opts
    );

    info!("start");
    let start = Instant::now();
    let summary = generate_with_progress(&opts)?;
    info!("{}", summary);
    if summary.failed_count() > 0 {
        warn!("{} files could not be written", summary.failed_count());
    }
    info!("done in {} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
