//! Terminal output formatting
//!
//! Display utilities for line-mode games and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_board, print_check_result, print_game_result, print_statistics,
};
