//! Aggregator: the single reader of the result queue.

use crossbeam_channel::Receiver;
use log::{debug, error};

use crate::{ResultItem, Summary};

/// Drain `result_rx` until it closes. Counts every result, logs each failure with its file name,
/// and hands each result to `on_result` (if any) before moving on.
pub fn aggregate<F>(result_rx: &Receiver<ResultItem>, mut on_result: Option<F>) -> Summary
where
    F: FnMut(&ResultItem),
{
    let mut summary = Summary::default();
    while let Ok(result) = result_rx.recv() {
        summary.total += 1;
        match &result.error {
            Some(e) => {
                error!(
                    "error creating file {} (worker {}): {}",
                    result.file_name, result.worker_index, e
                );
                summary.failed.push(result.file_name.clone());
            }
            None => summary.succeeded += 1,
        }
        if let Some(f) = on_result.as_mut() {
            f(&result);
        }
    }
    debug!(
        "aggregator: result queue closed after {} results",
        summary.total
    );
    summary
}
