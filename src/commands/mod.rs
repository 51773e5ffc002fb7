//! Command implementations

pub mod audit;
pub mod check;
pub mod countdown;
pub mod setup;
pub mod simple;

pub use audit::{AuditExample, AuditReport, naive_classification, run_audit};
pub use check::{CheckResult, check_pair};
pub use countdown::countdown_message;
pub use setup::{GameSetup, is_already_played};
pub use simple::{run_simple, run_simple_with};
