//! Pipeline channels and handles: what the job source, workers and aggregator share.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::utils::config::ChannelCaps;
use crate::{ResultItem, WorkItem};

/// Per-worker settings, cloned into every worker thread.
#[derive(Clone, Debug)]
pub struct WorkerContext {
    pub output_dir: PathBuf,
    pub content_length: usize,
    pub seed: Option<u64>,
    /// When false, the per-file line is logged at debug (a progress bar is showing).
    pub log_each_file: bool,
}

/// Handles returned by [`run_pipeline`](super::run_pipeline): receive results, then join.
/// `result_rx` closes only once every worker has exited.
pub struct PipelineHandles {
    pub result_rx: Receiver<ResultItem>,
    pub source_handle: JoinHandle<usize>,
    pub worker_handles: Vec<JoinHandle<()>>,
    pub supervisor_handle: JoinHandle<()>,
}

/// Job queue (source -> workers) and result queue (workers -> aggregator).
pub struct PipelineChannels {
    pub job_tx: Sender<WorkItem>,
    pub job_rx: Receiver<WorkItem>,
    pub result_tx: Sender<ResultItem>,
    pub result_rx: Receiver<ResultItem>,
}

pub fn create_pipeline_channels() -> PipelineChannels {
    let (job_tx, job_rx) = bounded::<WorkItem>(ChannelCaps::JOBS);
    let (result_tx, result_rx) = bounded::<ResultItem>(ChannelCaps::RESULTS);
    PipelineChannels {
        job_tx,
        job_rx,
        result_tx,
        result_rx,
    }
}
