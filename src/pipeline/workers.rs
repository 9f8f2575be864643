use crossbeam_channel::{Receiver, Sender};
use crossbeam_utils::sync::WaitGroup;
use log::{Level, debug, log};
use std::fs;
use std::thread::{self, JoinHandle};

use crate::engine::content::ContentGenerator;
use crate::engine::tools::file_path_for;
use crate::{ResultItem, WorkItem};

use super::context::WorkerContext;

/// Single file worker: take jobs until the job queue is closed and drained, write each file,
/// send one result per job. Dropping `done` is this worker's completion signal.
fn file_worker_loop(
    worker_index: usize,
    job_rx: Receiver<WorkItem>,
    result_tx: Sender<ResultItem>,
    ctx: WorkerContext,
    done: WaitGroup,
) {
    let mut generator = ContentGenerator::from_os_rng();
    let level = if ctx.log_each_file {
        Level::Info
    } else {
        Level::Debug
    };
    while let Ok(job) = job_rx.recv() {
        let path = file_path_for(&ctx.output_dir, &job);
        let content = match ctx.seed {
            Some(seed) => ContentGenerator::for_item(seed, job.index).generate(ctx.content_length),
            None => generator.generate(ctx.content_length),
        };
        let error = fs::write(&path, content).err();
        log!(
            level,
            "worker {} working on {} file generation",
            worker_index,
            job.file_name
        );
        let result = ResultItem {
            file_name: job.file_name,
            worker_index,
            error,
        };
        if result_tx.send(result).is_err() {
            break;
        }
    }
    drop(result_tx);
    drop(done);
}

/// Spawn `num_workers` file workers plus a supervisor. Returns `(worker_handles, supervisor_handle)`.
///
/// Every worker reads the shared `job_rx` and writes to a clone of `result_tx`. The supervisor keeps
/// the last sender and drops it only after all workers have signalled done, so the result queue
/// closes exactly when no worker can produce another result.
pub fn spawn_file_workers(
    job_rx: Receiver<WorkItem>,
    result_tx: Sender<ResultItem>,
    ctx: &WorkerContext,
    num_workers: usize,
) -> (Vec<JoinHandle<()>>, JoinHandle<()>) {
    let done = WaitGroup::new();
    let worker_handles = (0..num_workers)
        .map(|worker_index| {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let ctx = ctx.clone();
            let done = done.clone();
            thread::spawn(move || file_worker_loop(worker_index, job_rx, result_tx, ctx, done))
        })
        .collect();
    drop(job_rx);

    let supervisor_handle = thread::spawn(move || {
        done.wait();
        drop(result_tx);
        debug!(
            "supervisor: {} workers done, result queue closed",
            num_workers
        );
    });
    (worker_handles, supervisor_handle)
}
