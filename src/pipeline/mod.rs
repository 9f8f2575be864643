//! Pipeline components: job source, file workers with their supervisor, aggregator.

pub mod aggregator;
pub mod context;
pub mod orchestrator;
pub mod source;
pub mod workers;

pub use aggregator::aggregate;
pub use context::{PipelineChannels, PipelineHandles, WorkerContext, create_pipeline_channels};
pub use orchestrator::{run_generation, run_pipeline, shutdown_pipeline_handles};
pub use source::{run_job_source, spawn_job_source};
pub use workers::spawn_file_workers;
