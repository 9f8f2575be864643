//! File generation: prepare the output directory, run the pipeline, tally results.

use anyhow::Result;
use kdam::Animation;
use log::debug;

use crate::engine::progress::{
    ProgressBarConfig, create_progress_bar, finish_progress_bar, update_progress_bar,
};
use crate::engine::tools::prepare_output_dir;
use crate::pipeline::run_generation;
use crate::utils::config::ProgressConsts;
use crate::{Opts, ResultItem, Summary};

/// Reset `opts.output_dir` and generate every file into it. Config and setup errors abort
/// before any worker is spawned; per-file write errors only show up in the summary.
pub fn generate_with_opts<F>(opts: &Opts, on_result: Option<F>) -> Result<Summary>
where
    F: FnMut(&ResultItem),
{
    let num_workers = opts.worker_count()?;
    prepare_output_dir(&opts.output_dir)?;
    debug!(
        "Output directory {} ready; starting {} workers",
        opts.output_dir.display(),
        num_workers
    );
    run_generation(opts, on_result)
}

/// CLI entry: like [`generate_with_opts`], with a progress bar when `opts.progress` is set.
pub fn generate_with_progress(opts: &Opts) -> Result<Summary> {
    if !opts.progress {
        return generate_with_opts(opts, None::<fn(&ResultItem)>);
    }
    let mut bar = create_progress_bar(ProgressBarConfig::new(
        opts.total_files,
        ProgressConsts::DESC,
        Animation::Classic,
    ));
    let summary = generate_with_opts(opts, Some(|_: &ResultItem| update_progress_bar(&mut bar, 1)));
    finish_progress_bar(&mut bar);
    summary
}
