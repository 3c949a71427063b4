//! Correctness-checked timing harness for `i32` sorting algorithms.
//!
//! ```
//! use int_sort_bench::Algorithm;
//!
//! let mut data = vec![-5, 3, -8, 1, 0, -2];
//! Algorithm::LsbRadix.sort(&mut data);
//! assert_eq!(data, [-8, -5, -2, 0, 1, 3]);
//! ```

pub mod algorithm;
pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod heap_sort;
pub mod lsd_radix;
pub mod merge_sort;
pub mod quadratic;
pub mod timer;
pub mod verify;

pub use algorithm::Algorithm;
pub use config::Config;
pub use error::ConfigError;
pub use heap_sort::heap_sort;
pub use lsd_radix::lsd_radix_sort;
pub use merge_sort::merge_sort;
pub use quadratic::{insertion_sort, selection_sort};
