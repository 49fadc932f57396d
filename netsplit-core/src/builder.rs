//! Builder utilities for configuring a [`Splitter`].
//!
//! Validates the progress batch size and collects the merge strategy and
//! allocation hint before constructing [`Splitter`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::NetsplitError, splitter::Splitter, strategy::StrategyKind};

/// Entries processed between progress reports unless overridden.
pub const DEFAULT_BATCH_SIZE: usize = 25_000;

/// Configures and constructs [`Splitter`] instances.
///
/// # Examples
/// ```
/// use netsplit_core::{SplitterBuilder, StrategyKind};
///
/// let splitter = SplitterBuilder::new()
///     .with_strategy(StrategyKind::Naive)
///     .with_batch_size(1_000)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(splitter.strategy(), StrategyKind::Naive);
/// assert_eq!(splitter.batch_size().get(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct SplitterBuilder {
    strategy: StrategyKind,
    batch_size: usize,
    capacity_hint: usize,
}

impl Default for SplitterBuilder {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            capacity_hint: 0,
        }
    }
}

impl SplitterBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use netsplit_core::{DEFAULT_BATCH_SIZE, SplitterBuilder, StrategyKind};
    ///
    /// let builder = SplitterBuilder::new();
    /// assert_eq!(builder.batch_size(), DEFAULT_BATCH_SIZE);
    /// assert_eq!(builder.strategy(), StrategyKind::SizeAware);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the merge strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured merge strategy.
    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Overrides how many entries are processed between progress reports.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Returns the configured batch size.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Pre-sizes the membership index for roughly `edges` distinct edges.
    ///
    /// Sources report only their entry count, so networks with many edges
    /// that appear only as neighbours benefit from a larger hint.
    #[must_use]
    pub fn with_capacity_hint(mut self, edges: usize) -> Self {
        self.capacity_hint = edges;
        self
    }

    /// Validates the configuration and constructs a [`Splitter`].
    ///
    /// # Errors
    /// Returns [`NetsplitError::InvalidBatchSize`] when the batch size is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use netsplit_core::{NetsplitError, SplitterBuilder};
    ///
    /// let err = SplitterBuilder::new().with_batch_size(0).build().unwrap_err();
    /// assert_eq!(err, NetsplitError::InvalidBatchSize { got: 0 });
    /// ```
    pub fn build(self) -> Result<Splitter> {
        let batch_size = NonZeroUsize::new(self.batch_size).ok_or(
            NetsplitError::InvalidBatchSize {
                got: self.batch_size,
            },
        )?;

        Ok(Splitter::new(self.strategy, batch_size, self.capacity_hint))
    }
}
