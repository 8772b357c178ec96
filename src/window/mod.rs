//! Statistics over a sliding window of recent samples
//!
//! This module keeps count, min, max, sum, mean, variance and standard
//! deviation of the last N samples without rescanning the window on every
//! update.
//!
//! # Building blocks
//!
//! - [`CircularBuffer`]: fixed-capacity storage with a wrapping write cursor
//! - [`Moments`]: incremental sum, mean and M2 with removal support
//! - [`ExtremumTracker`]: min or max with rescan on eviction
//! - [`DriftCorrector`]: countdown to the next full recompute
//! - [`RollingStats`]: all of the above behind one API
//! - [`NaiveWindow`]: recompute-everything baseline
//!
//! # Example
//!
//! ```
//! use rollstats::window::RollingStats;
//!
//! let mut window = RollingStats::new(100);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     window.append(value);
//! }
//!
//! if let Some(stats) = window.stats() {
//!     println!("Mean: {}", stats.mean);
//!     println!("Stddev: {}", stats.standard_deviation);
//!     println!("Min: {}", stats.min);
//!     println!("Max: {}", stats.max);
//! }
//! ```

mod buffer;
mod drift;
mod extremum;
mod moments;
mod naive;
mod rolling;
mod snapshot;

pub use buffer::CircularBuffer;
pub use drift::DriftCorrector;
pub use extremum::{Bound, ExtremumTracker};
pub use moments::Moments;
pub use naive::NaiveWindow;
pub use rolling::RollingStats;
pub use snapshot::WindowStats;
