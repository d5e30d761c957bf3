//! Terminal output formatting
//!
//! Human-facing rendering only; the JSON boundary lives in `api`.

pub mod display;
pub mod formatters;

pub use display::{
    print_full_options, print_pattern_counts, print_rankings, print_remaining_distribution,
    print_simulation_stats, print_solve_report,
};
