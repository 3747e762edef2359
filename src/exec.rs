//! Execution policy for parallel-eligible operations
//!
//! Parallelism is an explicit, per-call configuration value rather than
//! process-wide state: every operation that can fan out across threads takes
//! an [`ExecPolicy`] argument and derives its chunk partition from it with
//! the same arithmetic. The partition is a pure function of the element count
//! and the policy, so parallel and sequential execution of the same
//! operation always produce identical results.

/// Default minimum number of elements per chunk
///
/// Partitioning below this size would spawn workers whose scheduling
/// overhead exceeds the work they do.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 1000;

/// Per-call execution configuration for elementwise, transpose, and
/// broadcast operations
///
/// The default policy is sequential; [`ExecPolicy::parallel`] opts in to the
/// multi-threaded path. With `--no-default-features` (no `rayon`) every
/// policy degrades to sequential execution.
///
/// # Example
///
/// ```
/// use cxtensor::ExecPolicy;
///
/// let policy = ExecPolicy::parallel().with_min_chunk_len(4096);
/// assert!(policy.is_parallel());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExecPolicy {
    parallel: bool,
    min_chunk_len: usize,
    max_threads: Option<usize>,
}

impl ExecPolicy {
    /// Single-threaded execution on the calling thread
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
            max_threads: None,
        }
    }

    /// Multi-threaded execution with the default chunk threshold
    pub const fn parallel() -> Self {
        Self {
            parallel: true,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
            max_threads: None,
        }
    }

    /// Set the minimum number of elements a chunk must carry
    ///
    /// A value of 0 is treated as 1.
    pub const fn with_min_chunk_len(mut self, len: usize) -> Self {
        self.min_chunk_len = len;
        self
    }

    /// Cap the number of chunks (and therefore workers)
    ///
    /// Without a cap, the available hardware parallelism is used.
    pub const fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = Some(threads);
        self
    }

    /// Whether this policy requests the multi-threaded path
    #[inline]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The minimum chunk length in effect
    #[inline]
    pub const fn min_chunk_len(&self) -> usize {
        self.min_chunk_len
    }

    /// Chunk length for partitioning `numel` elements, or `None` for the
    /// sequential path
    ///
    /// The chunk count is `min(threads, ceil(numel / min_chunk_len))`; chunk
    /// `t` covers `[t * chunk_len, (t + 1) * chunk_len)` with the final
    /// chunk absorbing the remainder. Returns `None` when the policy is
    /// sequential, when `numel` is too small to fill more than one chunk, or
    /// when the `rayon` feature is disabled.
    #[cfg(feature = "rayon")]
    pub(crate) fn chunk_len(&self, numel: usize) -> Option<usize> {
        if !self.parallel || numel == 0 {
            return None;
        }

        let threads = self
            .max_threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(std::num::NonZeroUsize::get)
                    .unwrap_or(1)
            })
            .max(1);

        let by_size = numel.div_ceil(self.min_chunk_len.max(1));
        let chunks = threads.min(by_size);
        if chunks <= 1 {
            return None;
        }

        Some(numel.div_ceil(chunks))
    }

    /// Sequential fallback when the `rayon` feature is disabled
    #[cfg(not(feature = "rayon"))]
    pub(crate) fn chunk_len(&self, _numel: usize) -> Option<usize> {
        None
    }
}

impl Default for ExecPolicy {
    /// The default policy is sequential
    fn default() -> Self {
        Self::sequential()
    }
}
