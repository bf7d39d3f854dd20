//! Operational tools shipped with the crate.
//!
//! Enabled by the `tools` feature, which also builds the `csv-split` and
//! `hs-loadtest` binaries.

pub mod csv_split;
pub mod load;

pub use csv_split::{split_csv, split_csv_file, SplitOptions};
pub use load::{run_load_test, LoadTestConfig, LoadTestReport, Sample, Step, StepStats};
