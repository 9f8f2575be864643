//! Job source: enumerates work items in index order on its own thread.

use crossbeam_channel::Sender;
use log::debug;
use std::thread::{self, JoinHandle};

use crate::WorkItem;

/// Send `total` items (index 0..total) on `job_tx`, then drop it so workers see the queue close.
/// Returns the number of items sent; fewer than `total` only if every receiver went away.
pub fn run_job_source(total: usize, job_tx: Sender<WorkItem>) -> usize {
    let mut sent = 0_usize;
    for index in 0..total {
        if job_tx.send(WorkItem::new(index)).is_err() {
            break;
        }
        sent += 1;
    }
    drop(job_tx);
    debug!("source: {} jobs queued, job queue closed", sent);
    sent
}

pub fn spawn_job_source(total: usize, job_tx: Sender<WorkItem>) -> JoinHandle<usize> {
    thread::spawn(move || run_job_source(total, job_tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn emits_in_order_then_closes() {
        let (tx, rx) = unbounded();
        assert_eq!(run_job_source(4, tx), 4);
        let items: Vec<WorkItem> = rx.iter().collect();
        let names: Vec<&str> = items.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["file-0.txt", "file-1.txt", "file-2.txt", "file-3.txt"]
        );
        assert!(items.iter().enumerate().all(|(n, i)| i.index == n));
    }

    #[test]
    fn zero_total_closes_immediately() {
        let (tx, rx) = unbounded::<WorkItem>();
        assert_eq!(run_job_source(0, tx), 0);
        assert!(rx.recv().is_err());
    }

    #[test]
    fn stops_when_receiver_dropped() {
        let (tx, rx) = unbounded::<WorkItem>();
        drop(rx);
        assert_eq!(run_job_source(10, tx), 0);
    }
}
