use clap::Parser;
use std::path::PathBuf;

/// Bulk random-file generator.
#[derive(Clone, Debug, Parser)]
#[command(name = "filegen")]
#[command(about = "Generate files of random letters using a pool of concurrent workers.")]
pub struct Cli {
    /// Number of files to create. Default: 3000.
    #[arg(long, short = 'n')]
    pub total_files: Option<usize>,

    /// Characters per file. Default: 5000.
    #[arg(long, short = 'l')]
    pub content_length: Option<usize>,

    /// Output directory. Removed and recreated on every run. Default: `random-files`.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Worker pool size. Default: number of available processing units.
    #[arg(long, short = 'w')]
    pub workers: Option<usize>,

    /// Seed for reproducible content (same seed, same bytes per file).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file. Default: `filegen.toml` in the current directory, if present.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show a progress bar instead of one log line per file.
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub progress: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_leaves_everything_unset() {
        let cli = Cli::try_parse_from(["filegen"]).unwrap();
        assert!(cli.total_files.is_none());
        assert!(cli.content_length.is_none());
        assert!(cli.output_dir.is_none());
        assert!(cli.workers.is_none());
        assert!(cli.progress.is_none());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from([
            "filegen", "-n", "10", "-l", "16", "-w", "4", "-o", "out", "-p", "-v",
        ])
        .unwrap();
        assert_eq!(cli.total_files, Some(10));
        assert_eq!(cli.content_length, Some(16));
        assert_eq!(cli.workers, Some(4));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.progress, Some(true));
        assert_eq!(cli.verbose, Some(true));
    }

    #[test]
    fn bool_flag_accepts_explicit_false() {
        let cli = Cli::try_parse_from(["filegen", "--progress", "false"]).unwrap();
        assert_eq!(cli.progress, Some(false));
    }

    #[test]
    fn rejects_negative_count() {
        assert!(Cli::try_parse_from(["filegen", "-n", "-1"]).is_err());
    }
}
