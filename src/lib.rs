//! filegen: bulk random-file generation over a fan-out/fan-in worker pipeline

pub mod engine;
pub mod generate;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;

/// Result alias used by public filegen API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: reset `opts.output_dir`, write `opts.total_files` random files into it and
/// return the tally.
///
/// - **`on_result: None`** → results are only counted (and failures logged).
/// - **`on_result: Some(f)`** → `f` also sees every [`ResultItem`] as the aggregator receives it.
///   It runs on the aggregating thread; workers wait on it, so keep it fast.
///
/// Fails before any file is written when the worker count is zero or the directory cannot be reset.
/// Individual write failures do not fail the call; see [`Summary::failed`].
pub fn generate_files<F>(opts: &GenOpts, on_result: Option<F>) -> Result<Summary>
where
    F: FnMut(&ResultItem),
{
    let opts = Opts::from(opts);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    generate::generate_with_opts(&opts, on_result)
}

/// Worker count used when [`GenOpts::num_workers`] is None.
pub fn default_worker_count() -> usize {
    utils::config::WorkerLimits::current().available.max(1)
}
