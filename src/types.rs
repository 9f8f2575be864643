//! Public and internal types for the filegen API and pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::utils::config::Defaults;

/// One unit of work: the file at `index` to be created. Emitted by the job source in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkItem {
    pub index: usize,
    pub file_name: String,
}

impl WorkItem {
    /// Build the item for `index`; the file name is always `file-<index>.txt`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            file_name: format!("file-{index}.txt"),
        }
    }
}

/// Outcome of one [`WorkItem`]. Every work item yields exactly one of these.
#[derive(Debug)]
pub struct ResultItem {
    pub file_name: String,
    /// Which worker wrote the file. Diagnostics only.
    pub worker_index: usize,
    /// Write error, or `None` on success.
    pub error: Option<io::Error>,
}

impl ResultItem {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Final tally produced by the aggregator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    /// File names whose write failed, in the order their results arrived.
    pub failed: Vec<String>,
}

impl Summary {
    pub fn failed_count(&self) -> usize {
        self.total - self.succeeded
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} of total files created", self.succeeded, self.total)
    }
}

/// Lib-only options for [`generate_files`](crate::generate_files).
#[derive(Clone, Debug)]
pub struct GenOpts {
    /// Number of files to create.
    pub total_files: usize,
    /// Characters written to each file.
    pub content_length: usize,
    /// Destination directory. Removed and recreated before generation.
    pub output_dir: PathBuf,
    /// Worker pool size. When None, uses the available processing units.
    pub num_workers: Option<usize>,
    /// Seed for reproducible content. When None, every worker seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenOpts {
    fn default() -> Self {
        Self {
            total_files: Defaults::TOTAL_FILES,
            content_length: Defaults::CONTENT_LENGTH,
            output_dir: PathBuf::from(Defaults::OUTPUT_DIR),
            num_workers: None,
            seed: None,
        }
    }
}

impl From<&GenOpts> for Opts {
    fn from(o: &GenOpts) -> Self {
        Opts {
            total_files: o.total_files,
            content_length: o.content_length,
            output_dir: o.output_dir.clone(),
            num_workers: o.num_workers,
            seed: o.seed,
            verbose: false,
            progress: false,
        }
    }
}

/// Full options (CLI). Use [`GenOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    pub total_files: usize,
    pub content_length: usize,
    pub output_dir: PathBuf,
    /// Worker pool size. When None, uses the available processing units.
    pub num_workers: Option<usize>,
    /// Seed for reproducible content.
    pub seed: Option<u64>,
    /// Debug logging for this crate.
    pub verbose: bool,
    /// Show a progress bar; per-file log lines drop to debug level while it is up.
    pub progress: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts::from(&GenOpts::default())
    }
}

impl Opts {
    /// Resolve the pool size. An explicit zero is rejected; no worker would ever drain the queue.
    pub fn worker_count(&self) -> anyhow::Result<usize> {
        match self.num_workers {
            Some(0) => Err(anyhow::anyhow!("worker count must be at least 1")),
            Some(n) => Ok(n),
            None => Ok(crate::default_worker_count()),
        }
    }
}
