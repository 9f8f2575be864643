use anyhow::Result;
use log::debug;

use crate::pipeline::{self, WorkerContext};
use crate::{Opts, ResultItem, Summary};

/// Start the source -> workers pipeline writing into `opts.output_dir` (which must exist).
/// Caller drains `result_rx` and then joins via [`shutdown_pipeline_handles`].
pub fn run_pipeline(opts: &Opts) -> Result<pipeline::PipelineHandles> {
    let num_workers = opts.worker_count()?;
    debug!(
        "pipeline: {} files x {} chars, {} workers",
        opts.total_files, opts.content_length, num_workers
    );

    let channels = pipeline::create_pipeline_channels();
    let source_handle = pipeline::spawn_job_source(opts.total_files, channels.job_tx);

    let ctx = WorkerContext {
        output_dir: opts.output_dir.clone(),
        content_length: opts.content_length,
        seed: opts.seed,
        log_each_file: !opts.progress,
    };
    let (worker_handles, supervisor_handle) =
        pipeline::spawn_file_workers(channels.job_rx, channels.result_tx, &ctx, num_workers);

    Ok(pipeline::PipelineHandles {
        result_rx: channels.result_rx,
        source_handle,
        worker_handles,
        supervisor_handle,
    })
}

/// Join source, workers and supervisor (after the result queue is drained). Returns the job count.
pub fn shutdown_pipeline_handles(
    source_handle: std::thread::JoinHandle<usize>,
    worker_handles: Vec<std::thread::JoinHandle<()>>,
    supervisor_handle: std::thread::JoinHandle<()>,
) -> Result<usize> {
    let queued = source_handle
        .join()
        .map_err(|_| anyhow::anyhow!("job source thread panicked"))?;
    for (i, h) in worker_handles.into_iter().enumerate() {
        h.join()
            .map_err(|_| anyhow::anyhow!("worker {} panicked", i))?;
    }
    supervisor_handle
        .join()
        .map_err(|_| anyhow::anyhow!("supervisor thread panicked"))?;
    Ok(queued)
}

/// Main orchestrator: run the pipeline into an existing output dir and aggregate every result.
/// Source -> job queue -> workers (file writes) -> result queue -> Summary.
pub fn run_generation<F>(opts: &Opts, on_result: Option<F>) -> Result<Summary>
where
    F: FnMut(&ResultItem),
{
    let pipeline::PipelineHandles {
        result_rx,
        source_handle,
        worker_handles,
        supervisor_handle,
    } = run_pipeline(opts)?;

    let summary = pipeline::aggregate(&result_rx, on_result);

    let queued = shutdown_pipeline_handles(source_handle, worker_handles, supervisor_handle)?;
    if queued != summary.total {
        return Err(anyhow::anyhow!(
            "{} jobs queued but {} results received",
            queued,
            summary.total
        ));
    }
    Ok(summary)
}
