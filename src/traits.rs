//! Core traits and error types for sliding-window statistics
//!
//! Every window implementation exposes the [`RollingWindow`] trait, so the
//! incremental engine and the naive baseline can be driven by the same code
//! (benchmarks, oracle tests).

use core::fmt::Debug;

use thiserror::Error;

use crate::window::WindowStats;

/// Invalid window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A window must hold at least one sample
    #[error("window capacity must be positive")]
    ZeroCapacity,
    /// The drift-correction floor must be at least one append
    #[error("recompute floor must be positive")]
    ZeroRecomputeFloor,
}

/// A sample refused by the window
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    /// NaN or an infinity under [`NonFinitePolicy::Reject`](crate::config::NonFinitePolicy::Reject)
    #[error("non-finite sample rejected: {value}")]
    NonFinite { value: f64 },
}

/// Any error returned by the window API
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindowError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// A fixed-capacity window over the most recent samples
pub trait RollingWindow: Debug {
    /// Add a sample, evicting the oldest one once the window is full
    fn push(&mut self, value: f64);

    /// Statistics over the current contents, `None` while the window is empty
    fn stats(&self) -> Option<WindowStats>;

    /// Number of samples currently held
    fn len(&self) -> usize;

    /// Maximum number of samples held
    fn capacity(&self) -> usize;

    /// Check if the window holds no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the next push evicts a sample
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
