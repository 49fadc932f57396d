//! Progress notifications emitted while a pass is running.

use std::time::Duration;

use tracing::info;

/// Snapshot reported every `batch_size` processed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Entries processed so far.
    pub processed: usize,
    /// Components live at the time of the report.
    pub live_components: usize,
    /// Wall-clock time since the pass started.
    pub elapsed: Duration,
}

/// Receives [`Progress`] snapshots from a running pass.
///
/// Any `FnMut(&Progress)` closure is an observer.
///
/// # Examples
/// ```
/// use netsplit_core::{AdjacencyList, Progress, SplitterBuilder};
///
/// let source = AdjacencyList::from_pairs("demo", [(1, vec![2]), (3, vec![4])]);
/// let splitter = SplitterBuilder::new().with_batch_size(1).build()?;
/// let mut seen = Vec::new();
/// splitter.run_with_observer(&source, &mut |progress: &Progress| {
///     seen.push(progress.live_components);
/// })?;
/// assert_eq!(seen, vec![1, 2]);
/// # Ok::<(), netsplit_core::NetsplitError>(())
/// ```
pub trait ProgressObserver {
    /// Called once per completed batch.
    fn on_progress(&mut self, progress: &Progress);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&Progress),
{
    fn on_progress(&mut self, progress: &Progress) {
        self(progress);
    }
}

/// Emits each snapshot as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn on_progress(&mut self, progress: &Progress) {
        let elapsed_ms = u64::try_from(progress.elapsed.as_millis()).unwrap_or(u64::MAX);
        info!(
            processed = progress.processed,
            live_components = progress.live_components,
            elapsed_ms,
            "entries processed"
        );
    }
}

/// Discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn on_progress(&mut self, _progress: &Progress) {}
}
