//! # Rollstats
//!
//! Sliding-window descriptive statistics for Rust.
//!
//! Rollstats keeps count, minimum, maximum, sum, mean, variance and standard
//! deviation over the most recent N samples of a stream, designed for
//! real-time and telemetry consumers that feed one sample at a time.
//!
//! ## Features
//!
//! - **O(1) amortized updates**: Welford-style insertion and removal of moments
//! - **Exact extrema**: min/max tracked by slot, rescanned only when evicted
//! - **Bounded drift**: moments rebuilt from the buffer at a fixed interval
//! - **Explicit emptiness**: an empty window reports `None`, never zeros
//!
//! ## Quick Start
//!
//! ```rust
//! use rollstats::prelude::*;
//!
//! // Latency over the last 1000 requests
//! let mut latency = RollingStats::new(1000);
//! for ms in [12.0, 15.0, 11.0, 40.0] {
//!     latency.append(ms);
//! }
//!
//! let stats = latency.stats().unwrap();
//! println!("mean {:.1} ms, max {} ms", stats.mean, stats.max);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use rollstats::config::{NonFinitePolicy, WindowConfig};
//! use rollstats::window::RollingStats;
//!
//! let config = WindowConfig::new(500).with_non_finite(NonFinitePolicy::Reject);
//! let mut window = RollingStats::with_config(config).unwrap();
//!
//! assert!(window.try_append(f64::NAN).is_err());
//! assert!(window.try_append(1.5).is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of configurations and snapshots

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod config;
pub mod traits;
pub mod window;

mod math;

pub mod prelude {
    pub use crate::config::{NonFinitePolicy, WindowConfig};
    pub use crate::traits::*;
    pub use crate::window::{NaiveWindow, RollingStats, WindowStats};
}

pub use config::WindowConfig;
pub use window::{RollingStats, WindowStats};
