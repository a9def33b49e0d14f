//! Batch orchestration. Decoding and extraction are CPU-bound, so each
//! document runs on the blocking pool; the async side only dispatches and
//! collects. One malformed document becomes one empty record and a warning,
//! never a batch failure.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::extract::Extractor;
use crate::ingest::source::TextSource;
use crate::models::document::RawDocument;
use crate::models::record::CandidateRecord;

/// Outcome counters for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub decoded: usize,
    pub failed: usize,
}

/// Runs extraction over every path with at most `jobs` documents in flight.
/// Records come back reordered by discovery index, so output order always
/// matches the sorted input paths regardless of completion order.
pub async fn run_batch(
    source: Arc<dyn TextSource>,
    extractor: Arc<Extractor>,
    paths: Vec<PathBuf>,
    jobs: usize,
) -> (Vec<CandidateRecord>, BatchSummary) {
    let total = paths.len();
    let mut slots: Vec<Option<CandidateRecord>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);
    let mut failed = 0usize;

    let jobs = jobs.max(1);
    let mut queue = paths.into_iter().enumerate();
    let mut tasks: JoinSet<(usize, bool, CandidateRecord)> = JoinSet::new();

    loop {
        while tasks.len() < jobs {
            let Some((idx, path)) = queue.next() else { break };
            let source = Arc::clone(&source);
            let extractor = Arc::clone(&extractor);
            tasks.spawn_blocking(move || {
                match source.load(&path) {
                    Ok(doc) => (idx, true, extractor.extract(&doc)),
                    Err(e) => {
                        warn!("Skipping {}: {e}", path.display());
                        // the sentinel keeps the row present, just empty
                        (idx, false, extractor.extract(&RawDocument::empty()))
                    }
                }
            });
        }

        let Some(joined) = tasks.join_next().await else { break };
        match joined {
            Ok((idx, decoded, record)) => {
                if !decoded {
                    failed += 1;
                }
                slots[idx] = Some(record);
            }
            Err(e) => {
                // a panicked task loses its index; its slot stays empty and
                // is filled with a default record below
                warn!("Extraction task failed: {e}");
                failed += 1;
            }
        }
    }

    let records: Vec<CandidateRecord> = slots
        .into_iter()
        .map(|slot| slot.unwrap_or_default())
        .collect();

    let summary = BatchSummary {
        total,
        decoded: total - failed,
        failed,
    };
    info!(
        "Batch complete: {} documents, {} decoded, {} failed",
        summary.total, summary.decoded, summary.failed
    );
    (records, summary)
}
